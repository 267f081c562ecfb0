use super::CharacterClass;

/// Default length, taken from the interactive form's preset.
pub const DEFAULT_LENGTH: usize = 12;

/// Longest password a request may ask for.
pub const MAX_LENGTH: usize = 1 << 16;

/// Parameters for one password.
///
/// `safe_symbols_only` only matters when `include_symbols` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub safe_symbols_only: bool,
}

impl GenerationRequest {
    pub const fn new(
        length: usize,
        include_upper: bool,
        include_lower: bool,
        include_digits: bool,
        include_symbols: bool,
        safe_symbols_only: bool,
    ) -> Self {
        Self {
            length,
            include_upper,
            include_lower,
            include_digits,
            include_symbols,
            safe_symbols_only,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_upper(mut self, on: bool) -> Self {
        self.include_upper = on;
        self
    }

    pub fn with_lower(mut self, on: bool) -> Self {
        self.include_lower = on;
        self
    }

    pub fn with_digits(mut self, on: bool) -> Self {
        self.include_digits = on;
        self
    }

    pub fn with_symbols(mut self, on: bool) -> Self {
        self.include_symbols = on;
        self
    }

    pub fn with_safe_symbols_only(mut self, on: bool) -> Self {
        self.safe_symbols_only = on;
        self
    }

    /// Selected classes in generation order: uppercase, lowercase, digits, then
    /// one of the two symbol sets.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_upper {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_lower {
            classes.push(CharacterClass::Lowercase);
        }
        if self.include_digits {
            classes.push(CharacterClass::Digits);
        }
        if self.include_symbols {
            classes.push(if self.safe_symbols_only {
                CharacterClass::SafeSymbols
            } else {
                CharacterClass::Symbols
            });
        }
        classes
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, true, true, true, true, false)
    }
}
