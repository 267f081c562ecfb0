//! Terminal output helpers: box drawing and terminal reset.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

pub const BOX_WIDTH: usize = 48;

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and clear any dangling SGR attributes.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Box top with an optional title: `┌─ Title ────┐`
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        return writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
}

/// Box content line, padded to the box width: `│ content    │`
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(display_width(content));
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

// Visible width, skipping ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
