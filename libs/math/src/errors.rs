//! Crate errors.

use num_bigint::BigUint;
use thiserror::Error;

/// The element has no multiplicative inverse for the given modulus.
///
/// For a prime modulus this only happens for zero, so seeing this error elsewhere means the modulus is
/// not prime.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("element has no multiplicative inverse")]
pub struct NoInverseError;

/// A value was rejected as a field modulus.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidPrimeError {
    /// The modulus is smaller than the smallest prime.
    #[error("modulus must be at least 2")]
    TooSmall,

    /// The modulus is composite.
    #[error("{0} is not a prime number")]
    NotPrime(BigUint),

    /// The modulus is not a decimal number.
    #[error("'{0}' is not a decimal number")]
    Unparsable(String),
}

/// A value is not a canonical element of the field.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("value is not reduced modulo the field prime")]
pub struct NotAFieldElement;

/// Too many elements were requested from a field.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("field does not have {0} elements")]
pub struct TooManyElements(pub u64);

/// Failed Interpolation Error
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InterpolationError {
    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,

    /// The point sequence has duplicate abscissas.
    #[error("point sequence has duplicate abscissas")]
    DuplicateAbscissas,

    /// A coordinate is not an element of the field.
    #[error(transparent)]
    NotAFieldElement(#[from] NotAFieldElement),

    /// A denominator could not be inverted.
    #[error(transparent)]
    NoInverse(#[from] NoInverseError),
}
