//! Shared terminal utilities.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
