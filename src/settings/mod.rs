//! Generation settings.
//!
//! Built-in defaults, overridden by `PASSGEN_*` environment variables and then
//! by command-line flags (both resolved by the CLI parser).

use crate::pass::GenerationRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub safe_symbols_only: bool,
    pub number_of_passwords: usize,
    pub seed: Option<u64>,
    pub show_entropy: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.pass_length,
            self.include_upper,
            self.include_lower,
            self.include_digits,
            self.include_symbols,
            self.safe_symbols_only && self.include_symbols,
        )
    }

    /// Copy the class selection and length from an interactively built request.
    pub fn apply_request(&mut self, request: &GenerationRequest) {
        self.pass_length = request.length;
        self.include_upper = request.include_upper;
        self.include_lower = request.include_lower;
        self.include_digits = request.include_digits;
        self.include_symbols = request.include_symbols;
        self.safe_symbols_only = request.safe_symbols_only;
    }
}

impl Default for Settings {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Self {
            pass_length: request.length,
            include_upper: request.include_upper,
            include_lower: request.include_lower,
            include_digits: request.include_digits,
            include_symbols: request.include_symbols,
            safe_symbols_only: request.safe_symbols_only,
            number_of_passwords: 1,
            seed: None,
            show_entropy: false,
            quiet: false,
        }
    }
}
