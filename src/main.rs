use std::process::ExitCode;

use passgen::{cli, exits};

fn main() -> ExitCode {
    exits::install_handlers();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("exiting on error: {:?}", e);
            cli::prompts::error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
