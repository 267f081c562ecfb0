//! Interactive prompt flow (`--noui`): sequential questions, one request out.

use std::io::{BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::error::{InvalidRequest, Result};
use crate::pass::{GenerationRequest, MAX_LENGTH};
use crate::terminal::{RawModeGuard, reset_terminal};

const LENGTH_QUESTION: &str = "What's the length of the password? ";
const UPPER_QUESTION: &str = "Would you like to include uppercase letters? [Y/n] ";
const LOWER_QUESTION: &str = "Would you like to include lowercase letters? [Y/n] ";
const DIGITS_QUESTION: &str = "Would you like to include numbers? [Y/n] ";
const SYMBOLS_QUESTION: &str = "Would you like to include symbols? [Y/n] ";
const SAFE_QUESTION: &str =
    "Would you like to include ONLY safe symbols (excludes \\ ` { } [ ] |)? [Y/n] ";

/// Parse a length answer, at most [`MAX_LENGTH`]. Surrounding whitespace is
/// ignored. Also the value parser for `--length`.
pub fn parse_length(answer: &str) -> std::result::Result<usize, InvalidRequest> {
    let answer = answer.trim();
    match answer.parse::<usize>() {
        Ok(length) if length <= MAX_LENGTH => Ok(length),
        _ => Err(InvalidRequest::Length(answer.to_string())),
    }
}

/// Empty answer (just Enter), `y` or `yes` mean yes; anything else means no.
pub fn parse_yes_no(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer.is_empty() || answer == "y" || answer == "yes"
}

/// Asks the questions on `out` and reads the answers from `input`.
///
/// With `single_key` set, yes/no answers are single keypresses read from the
/// terminal in raw mode; `input` is still used for the length line.
pub struct Prompter<R, W> {
    input: R,
    out: W,
    single_key: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W, single_key: bool) -> Self {
        Self {
            input,
            out,
            single_key,
        }
    }

    /// Run the full question sequence.
    pub fn request(&mut self) -> Result<GenerationRequest> {
        let length = self.ask_length()?;
        let include_upper = self.ask_yes_no(UPPER_QUESTION)?;
        let include_lower = self.ask_yes_no(LOWER_QUESTION)?;
        let include_digits = self.ask_yes_no(DIGITS_QUESTION)?;
        let include_symbols = self.ask_yes_no(SYMBOLS_QUESTION)?;
        let safe_symbols_only = include_symbols && self.ask_yes_no(SAFE_QUESTION)?;

        Ok(GenerationRequest::new(
            length,
            include_upper,
            include_lower,
            include_digits,
            include_symbols,
            safe_symbols_only,
        ))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }

    fn ask_length(&mut self) -> Result<usize> {
        self.question(LENGTH_QUESTION)?;
        let line = self.read_line()?.unwrap_or_default();
        Ok(parse_length(&line)?)
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        self.question(question)?;
        if self.single_key {
            let yes = read_key_answer()?;
            writeln!(self.out, "{}", if yes { "y" } else { "n" })?;
            return Ok(yes);
        }
        // EOF is a "no", unlike an empty line
        Ok(self.read_line()?.is_some_and(|line| parse_yes_no(&line)))
    }

    fn question(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Wait for one keypress: Enter or `y` is yes, any other character or Esc is no.
fn read_key_answer() -> Result<bool> {
    let _guard = RawModeGuard::new()?;

    loop {
        if let Event::Key(key_event) = read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    // process::exit skips the guard's Drop
                    reset_terminal();
                    println!();
                    std::process::exit(130);
                }
                KeyCode::Enter => return Ok(true),
                KeyCode::Char(c) => return Ok(c.eq_ignore_ascii_case(&'y')),
                KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }
}
