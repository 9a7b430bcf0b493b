//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid scalar operands (division by zero), range overflow during checked conversions,
//! and invalid [`crate::context::CoordinateContext`] geometry.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid scalar: {0}")]
    InvalidScalar(String),

    #[error("overflow: {0}")]
    Overflow(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn division_by_zero(what: impl std::fmt::Display) -> Self {
        Error::InvalidScalar(format!("division of {what} by zero"))
    }

    pub(crate) fn overflow(what: impl std::fmt::Display) -> Self {
        Error::Overflow(what.to_string())
    }
}
