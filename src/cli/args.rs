use clap::Parser;

use super::parse_length;
use crate::pass::DEFAULT_LENGTH;
use crate::settings::Settings;

/// Random password generator.
///
/// Every selected character class appears at least once in each password.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "passgen", version, about, long_about = None)]
pub struct CliArgs {
    /// Ask for every option interactively instead of reading flags
    #[arg(short = 'n', long = "noui")]
    pub noui: bool,

    /// Characters per password
    #[arg(
        short,
        long,
        env = "PASSGEN_LENGTH",
        default_value_t = DEFAULT_LENGTH,
        value_parser = parse_length
    )]
    pub length: usize,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Only use symbols that are safe in shells and paths (excludes \ ` { } [ ] |).
    /// Has no effect with --no-symbols
    #[arg(short, long, env = "PASSGEN_SAFE_SYMBOLS")]
    pub safe_symbols: bool,

    /// How many passwords to print, one per line
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show an entropy estimate after the passwords
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress warnings and summaries
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            pass_length: self.length,
            include_upper: !self.no_upper,
            include_lower: !self.no_lower,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
            safe_symbols_only: self.safe_symbols,
            number_of_passwords: usize::try_from(self.count).unwrap_or(usize::MAX),
            seed: self.seed,
            show_entropy: self.entropy,
            quiet: self.quiet,
        }
    }
}
