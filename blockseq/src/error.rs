use thiserror::Error;

/// Errors raised by the sequence itself.
///
/// Failures of caller-supplied functions are never wrapped in this type;
/// the `try_` operations hand them back unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Exactly one element was expected.
    #[error("expected exactly one element, found {0}")]
    NotOne(usize),
    /// At most one element was expected.
    #[error("expected at most one element, found {0}")]
    MoreThanOne(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
