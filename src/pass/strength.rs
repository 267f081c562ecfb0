//! Entropy estimate for a generated password.

/// Bits of entropy for `length` independent picks from `alphabet_size` chars.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
