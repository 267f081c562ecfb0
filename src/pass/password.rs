use std::fmt;

use zeroize::Zeroize;

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(super) fn from_ascii(mut bytes: Vec<u8>) -> Self {
        let s = bytes.iter().copied().map(char::from).collect();
        bytes.zeroize();
        Password(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (all characters are single-byte ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.0.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
