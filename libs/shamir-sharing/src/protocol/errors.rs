//! Secret Sharing Scheme errors.

use math_lib::{
    errors::{InterpolationError, InvalidPrimeError, NoInverseError},
    modular::Prime,
};
use thiserror::Error;

/// A parameter handed to the sharing scheme is outside of its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameterError {
    /// The secret does not fit in the field.
    #[error("secret must be smaller than the prime {prime}")]
    SecretTooLarge {
        /// The prime in use.
        prime: Prime,
    },

    /// The threshold is zero.
    #[error("threshold must be at least 1")]
    ZeroThreshold,

    /// No shares were requested.
    #[error("share count must be at least 1")]
    ZeroShares,

    /// The threshold is higher than the number of shares.
    #[error("threshold {threshold} is larger than the share count {shares}")]
    ThresholdTooLarge {
        /// The requested threshold.
        threshold: u64,

        /// The requested number of shares.
        shares: u64,
    },

    /// The field doesn't have enough non-zero elements to give every share a distinct abscissa.
    #[error("{shares} shares need more non-zero abscissas than the prime {prime} provides")]
    TooManyShares {
        /// The requested number of shares.
        shares: u64,

        /// The prime in use.
        prime: Prime,
    },

    /// An abscissa is zero, which would hand out the secret itself.
    #[error("abscissa 0 would reveal the secret")]
    ZeroAbscissa,

    /// The requested abscissas are not pairwise distinct.
    #[error("abscissas must be distinct")]
    DuplicateAbscissas,

    /// An abscissa is not a field element.
    #[error("abscissa is not an element of the field")]
    AbscissaOutOfField,

    /// No shares were provided.
    #[error("no shares provided")]
    NoShares,

    /// A share coordinate is not a field element.
    #[error("share coordinates must be elements of the field")]
    ShareOutOfField,

    /// A selected share does not exist.
    #[error("share {0} does not exist")]
    UnknownShare(u64),

    /// A share was selected more than once.
    #[error("share {0} selected more than once")]
    DuplicateShareSelection(u64),
}

/// Shamir secret sharing failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    /// A parameter is invalid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameterError),

    /// The configured modulus is not a prime.
    #[error("invalid prime: {0}")]
    InvalidPrime(#[from] InvalidPrimeError),

    /// Two shares handed to the reconstruction have the same x-coordinate.
    #[error("shares have duplicate x-coordinates")]
    DuplicateXCoordinate,

    /// An element had no inverse.
    #[error(transparent)]
    NoInverse(#[from] NoInverseError),
}

impl From<InterpolationError> for ShamirError {
    fn from(e: InterpolationError) -> Self {
        match e {
            InterpolationError::EmptySequence => InvalidParameterError::NoShares.into(),
            InterpolationError::DuplicateAbscissas => Self::DuplicateXCoordinate,
            InterpolationError::NotAFieldElement(_) => InvalidParameterError::ShareOutOfField.into(),
            InterpolationError::NoInverse(e) => Self::NoInverse(e),
        }
    }
}
