//! Password generation.

pub mod charset;
mod generate;
mod password;
mod request;
mod strength;

pub use charset::{Alphabet, CharacterClass};
pub use generate::{generate, generate_with};
pub use password::Password;
pub use request::{DEFAULT_LENGTH, GenerationRequest, MAX_LENGTH};
pub use strength::{entropy_bits, strength};
