//! The crate's error type.

use thiserror::Error;

/// Errors returned by the fallible operations of this crate.
///
/// Every operation that returns this error also has a non-failing form returning an [`Option`]
/// or a [`bool`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A vector or quaternion was too close to zero length to be normalized.
    #[error("cannot normalize a vector of (nearly) zero length")]
    DivideByZero,

    /// A checked element access was out of bounds.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Parsing found the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    /// Parsing failed to read a component.
    #[error("invalid component at index {index}: {message}")]
    InvalidComponent { index: usize, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::OutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 is out of range for length 2",
        );
        assert_eq!(
            Error::ComponentCount {
                expected: 3,
                found: 4
            }
            .to_string(),
            "expected 3 components, found 4",
        );
    }
}
