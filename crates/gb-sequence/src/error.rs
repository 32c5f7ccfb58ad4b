//! Error type shared by all fallible calculator operations.

use thiserror::Error;

/// Errors raised by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument fell outside the domain the calculator accepts,
    /// e.g. a perceptual level below the minimum.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;
