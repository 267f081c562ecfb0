//! Password generator with guaranteed character-class coverage.
//!
//! ```
//! use passgen::pass::{self, GenerationRequest};
//!
//! let request = GenerationRequest::new(16, true, true, true, true, true);
//! let password = pass::generate(&request).unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;

pub use error::{Error, InvalidRequest};
pub use pass::{GenerationRequest, Password, generate, generate_with};
