//! Warning and error messages for CLI output.

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn paint(color: &str, msg: &str) -> String {
    if quiet::stderr_is_tty() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Yellow warning on stderr, muted in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", paint(YELLOW, msg));
    }
}

/// Red error on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg));
}

/// Length shorter than the number of selected classes.
pub fn short_length(length: usize, classes: usize) {
    warn(&format!(
        "Warning: length {length} is below the {classes} selected character classes; \
         not every class will appear."
    ));
}
