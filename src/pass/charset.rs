//! Character classes and the per-call alphabet built from them.

use rand::Rng;

use super::GenerationRequest;
use crate::error::InvalidRequest;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
// SYMBOLS minus \ ` { } [ ] |
const SAFE_SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@^_~";

/// A fixed, named set of ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
    SafeSymbols,
}

impl CharacterClass {
    pub const fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
            CharacterClass::SafeSymbols => SAFE_SYMBOLS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
            CharacterClass::SafeSymbols => "safe symbols",
        }
    }

    /// Compact form for summaries.
    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "A-Z",
            CharacterClass::Lowercase => "a-z",
            CharacterClass::Digits => "0-9",
            CharacterClass::Symbols => "symbols",
            CharacterClass::SafeSymbols => "safe symbols",
        }
    }

    pub fn contains(self, c: u8) -> bool {
        self.chars().contains(&c)
    }

    /// Uniform pick from this class.
    #[inline]
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> u8 {
        pick_from(self.chars(), rng)
    }
}

/// The union of the classes selected by one request.
///
/// Built fresh for every generation call and dropped with it, so nothing
/// accumulates between calls.
#[derive(Debug, Clone)]
pub struct Alphabet {
    classes: Vec<CharacterClass>,
    pool: Vec<u8>,
}

impl Alphabet {
    /// Concatenate the selected classes in their fixed order.
    pub fn build(request: &GenerationRequest) -> Result<Self, InvalidRequest> {
        let classes = request.selected_classes();
        if classes.is_empty() {
            return Err(InvalidRequest::NoClassSelected);
        }

        let pool: Vec<u8> = classes.iter().flat_map(|class| class.chars()).copied().collect();

        log::debug!(
            "alphabet: {} chars from [{}]",
            pool.len(),
            classes.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
        );

        Ok(Self { classes, pool })
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    pub fn size(&self) -> usize {
        self.pool.len()
    }

    pub fn contains(&self, c: u8) -> bool {
        self.pool.contains(&c)
    }

    /// Uniform pick from the whole alphabet, with replacement.
    #[inline]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        pick_from(&self.pool, rng)
    }
}

// `random_range` samples without modulo bias. Callers guarantee a non-empty set.
#[inline]
fn pick_from<R: Rng + ?Sized>(set: &[u8], rng: &mut R) -> u8 {
    set[rng.random_range(0..set.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn class_sizes_match_reference_sets() {
        assert_eq!(CharacterClass::Uppercase.chars().len(), 26);
        assert_eq!(CharacterClass::Lowercase.chars().len(), 26);
        assert_eq!(CharacterClass::Digits.chars().len(), 10);
        assert_eq!(CharacterClass::Symbols.chars().len(), 32);
        assert_eq!(CharacterClass::SafeSymbols.chars().len(), 25);
    }

    #[test]
    fn safe_symbols_exclude_shell_sensitive_chars() {
        for c in b"\\`{}[]|" {
            assert!(CharacterClass::Symbols.contains(*c));
            assert!(!CharacterClass::SafeSymbols.contains(*c));
        }
        for c in CharacterClass::SafeSymbols.chars() {
            assert!(CharacterClass::Symbols.contains(*c));
        }
    }

    #[test]
    fn symbols_are_ascii_punctuation() {
        assert!(CharacterClass::Symbols.chars().iter().all(u8::is_ascii_punctuation));
        let all_punct = (0u8..=127).filter(u8::is_ascii_punctuation).count();
        assert_eq!(all_punct, CharacterClass::Symbols.chars().len());
    }

    #[test]
    fn build_orders_classes() {
        let request = GenerationRequest::default().with_safe_symbols_only(true);
        let alphabet = Alphabet::build(&request).unwrap();
        assert_eq!(
            alphabet.classes(),
            &[
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digits,
                CharacterClass::SafeSymbols,
            ]
        );
        assert_eq!(alphabet.size(), 26 + 26 + 10 + 25);
        assert!(alphabet.pool.starts_with(b"ABC"));
        assert!(alphabet.pool.ends_with(b"^_~"));
    }

    #[test]
    fn build_uses_exactly_one_symbol_set() {
        let full = Alphabet::build(&GenerationRequest::default()).unwrap();
        assert!(full.contains(b'|'));
        assert!(!full.classes().contains(&CharacterClass::SafeSymbols));

        let safe =
            Alphabet::build(&GenerationRequest::default().with_safe_symbols_only(true)).unwrap();
        assert!(!safe.contains(b'|'));
        assert!(!safe.classes().contains(&CharacterClass::Symbols));
    }

    #[test]
    fn build_rejects_empty_selection() {
        let request = GenerationRequest::new(10, false, false, false, false, true);
        assert_eq!(
            Alphabet::build(&request).unwrap_err(),
            InvalidRequest::NoClassSelected
        );
    }

    #[test]
    fn pick_stays_in_class() {
        let mut rng = StdRng::seed_from_u64(7);
        for class in [
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Digits,
            CharacterClass::Symbols,
            CharacterClass::SafeSymbols,
        ] {
            for _ in 0..200 {
                assert!(class.contains(class.pick(&mut rng)));
            }
        }
    }

    #[test]
    fn pick_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let class = CharacterClass::Symbols;
        let draws = 64_000;
        let mut counts = [0usize; 128];
        for _ in 0..draws {
            counts[class.pick(&mut rng) as usize] += 1;
        }
        let expected = draws / class.chars().len();
        for c in class.chars() {
            let n = counts[*c as usize];
            assert!(
                n > expected * 8 / 10 && n < expected * 12 / 10,
                "{} drawn {} times, expected ~{}",
                *c as char,
                n,
                expected
            );
        }
    }
}
