//! Error types.

use thiserror::Error;

use crate::pass::MAX_LENGTH;

/// A generation request that cannot produce a password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("no character class selected: enable at least one of uppercase, lowercase, digits or symbols")]
    NoClassSelected,
    #[error("invalid password length: {0:?} (expected a whole number from 0 to {max})", max = MAX_LENGTH)]
    Length(String),
}

/// Anything that stops the binary before a password is printed.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
