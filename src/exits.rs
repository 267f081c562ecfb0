//! Exit handling: terminal restore, signal handlers, core-dump suppression.

/// Put the controlling terminal back into cooked mode with echo on.
fn restore_termios() {
    unsafe {
        if libc::isatty(libc::STDIN_FILENO) != 1 {
            return;
        }
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, so it also runs after `process::exit`.
extern "C" fn cleanup_on_exit() {
    restore_termios();
}

/// SIGINT/SIGTERM/SIGHUP: leave through exit() so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit hook, and keep the process out of
/// core dumps. Call first thing in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
