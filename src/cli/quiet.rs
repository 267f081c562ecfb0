//! Process-wide quiet flag and TTY checks.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// stdin is a terminal, so single-key answers can be read in raw mode.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// stderr is a terminal, so ANSI colors are safe to emit there.
pub fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDERR_FILENO) == 1 }
}
