//! Error types for circangle.

use thiserror::Error;

/// Result alias for circangle operations.
pub type AngleResult<T> = std::result::Result<T, AngleError>;

/// Errors that can occur when constructing angles or computing statistics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AngleError {
    /// A parameter is outside its accepted domain.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: &'static str },
    /// No angle remained after filtering the input collection.
    #[error("no valid angle elements in input")]
    NoValidElements,
    /// The unit vectors cancel out, so the mean direction is undefined.
    #[error("ambiguous mean: unit vectors sum to zero")]
    AmbiguousMean,
    /// The angle of a zero-magnitude (or non-finite) vector is undefined.
    #[error("undefined angle: vector has zero or non-finite magnitude")]
    UndefinedAngle,
}

impl From<std::convert::Infallible> for AngleError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
