//! CLI context: resolved settings plus the parsed arguments.

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{CliArgs, Prompter, prompts, quiet};
use crate::error::Result;
use crate::pass::{self, GenerationRequest};
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top};

pub struct Context {
    pub settings: Settings,
    args: CliArgs,
}

impl Context {
    pub fn new(args: CliArgs) -> Self {
        Self {
            settings: args.settings(),
            args,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.settings.quiet);

        if self.args.noui {
            self.prompt_settings()?;
        }

        let request = self.settings.request();
        let classes = request.selected_classes().len();
        if request.length > 0 && request.length < classes {
            prompts::short_length(request.length, classes);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_passwords(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn prompt_settings(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), quiet::stdin_is_tty());
        let request = prompter.request()?;
        self.settings.apply_request(&request);
        Ok(())
    }

    /// Print the requested passwords, then the entropy box if asked for.
    pub fn write_passwords<W: Write>(&self, out: &mut W) -> Result<()> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords.max(1);
        log::info!(
            "generating {} password(s) of length {}",
            count,
            request.length
        );

        match self.settings.seed {
            Some(seed) => {
                log::debug!("using seeded generator ({})", seed);
                self.emit(&request, count, &mut StdRng::seed_from_u64(seed), out)?;
            }
            None => self.emit(&request, count, &mut rand::rng(), out)?,
        }

        if self.settings.show_entropy && !self.settings.quiet {
            write_entropy(&request, out)?;
        }
        Ok(())
    }

    fn emit<R: Rng + ?Sized, W: Write>(
        &self,
        request: &GenerationRequest,
        count: usize,
        rng: &mut R,
        out: &mut W,
    ) -> Result<()> {
        for _ in 0..count {
            let password = pass::generate_with(request, rng)?;
            if self.args.noui {
                write!(out, "\n{}\n", password)?;
            } else {
                writeln!(out, "{}", password)?;
            }
        }
        Ok(())
    }
}

// Called after generation succeeded, so the selection is non-empty.
fn write_entropy<W: Write>(request: &GenerationRequest, out: &mut W) -> Result<()> {
    let selected = request.selected_classes();
    let size: usize = selected.iter().map(|c| c.chars().len()).sum();
    let bits = pass::entropy_bits(request.length, size);
    let classes = selected
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out)?;
    box_top(out, "Entropy")?;
    box_line(out, &format!("{:.1} bits ({})", bits, pass::strength(bits)))?;
    box_line(out, &format!("Alphabet: {} chars", size))?;
    box_line(out, &format!("Classes: {}", classes))?;
    box_bottom(out)?;
    Ok(())
}
