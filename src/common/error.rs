//! Error types for blockplan.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in blockplan.
///
/// Schedule generation is exact arbitrary-precision arithmetic, so the only
/// thing that can go wrong is being asked to generate from parameters that
/// make no sense. That check runs once, up front, and fails fast.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested pointer width or minimum capacity cannot describe a
    /// power-of-two partition of an address space.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl Error {
    /// Build an `InvalidConfiguration` from anything string-like.
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
