//! Prime moduli.
//!
//! A [Prime] can only be constructed out of a value that passed the primality test, which lets the rest of the
//! crate assume every modulus it operates on defines a field.

use crate::errors::InvalidPrimeError;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// The prime used when no other one is configured.
pub const DEFAULT_PRIME: u32 = 2089;

/// Miller-Rabin with the first 13 primes as witnesses has no strong pseudoprime below this value.
pub const DETERMINISTIC_BOUND: u128 = 3_317_044_064_679_887_385_961_981;

/// Random-witness Miller-Rabin rounds run for candidates at or above [DETERMINISTIC_BOUND].
pub const RANDOM_ROUNDS: usize = 32;

// Used both for trial division and as the Miller-Rabin witness set.
const SMALL_PRIMES: [u32; 24] =
    [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89];

/// A validated prime number.
///
/// # Examples
///
/// ```
/// use math_lib::modular::Prime;
/// use num_bigint::BigUint;
///
/// let prime = Prime::next_above(&BigUint::from(42u32));
/// assert_eq!(prime.value(), &BigUint::from(43u32));
/// assert!(Prime::from_u64(91).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Prime(BigUint);

impl Prime {
    /// Validates and wraps a prime number.
    ///
    /// Primality is certain below [DETERMINISTIC_BOUND] and probabilistic above it, see [is_prime].
    pub fn new(value: BigUint) -> Result<Self, InvalidPrimeError> {
        if value < BigUint::from(2u32) {
            return Err(InvalidPrimeError::TooSmall);
        }
        if !is_prime(&value) {
            return Err(InvalidPrimeError::NotPrime(value));
        }
        Ok(Self(value))
    }

    /// Validates and wraps a prime number that fits in a u64.
    pub fn from_u64(value: u64) -> Result<Self, InvalidPrimeError> {
        Self::new(BigUint::from(value))
    }

    /// The smallest prime strictly greater than `value`.
    pub fn next_above(value: &BigUint) -> Self {
        let two = BigUint::from(2u32);
        let mut candidate = value + BigUint::one();
        if candidate <= two {
            return Self(two);
        }
        if (&candidate % 2u32).is_zero() {
            candidate += BigUint::one();
        }
        while !is_prime(&candidate) {
            candidate += &two;
        }
        Self(candidate)
    }

    /// The prime itself.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the prime and returns the inner value.
    pub fn into_value(self) -> BigUint {
        self.0
    }

    /// The number of bits needed to represent this prime.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl Default for Prime {
    fn default() -> Self {
        Self(BigUint::from(DEFAULT_PRIME))
    }
}

impl Display for Prime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<BigUint> for Prime {
    type Error = InvalidPrimeError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Prime> for BigUint {
    fn from(prime: Prime) -> Self {
        prime.0
    }
}

impl FromStr for Prime {
    type Err = InvalidPrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigUint::from_str(s.trim()).map_err(|_| InvalidPrimeError::Unparsable(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<String> for Prime {
    type Error = InvalidPrimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Prime> for String {
    fn from(prime: Prime) -> Self {
        prime.to_string()
    }
}

/// Checks whether `value` is prime.
///
/// Values are first trial-divided by small primes, anything left goes through Miller-Rabin using those same
/// primes as witnesses. That is deterministic below [DETERMINISTIC_BOUND]. Above it, strong pseudoprimes to every
/// fixed witness exist, so [RANDOM_ROUNDS] extra rounds with random witnesses are run and a composite is let through
/// with probability at most `4^-RANDOM_ROUNDS`.
pub fn is_prime(value: &BigUint) -> bool {
    if value < &BigUint::from(2u32) {
        return false;
    }
    for small in SMALL_PRIMES {
        let small = BigUint::from(small);
        if value == &small {
            return true;
        }
        if (value % &small).is_zero() {
            return false;
        }
    }
    if !miller_rabin(value, SMALL_PRIMES.into_iter().map(BigUint::from)) {
        return false;
    }
    if value < &BigUint::from(DETERMINISTIC_BOUND) {
        return true;
    }
    let mut rng = rand::thread_rng();
    let upper = value - BigUint::one();
    let witnesses: Vec<_> =
        (0..RANDOM_ROUNDS).map(|_| rng.gen_biguint_range(&BigUint::from(2u32), &upper)).collect();
    miller_rabin(value, witnesses)
}

// Expects an odd candidate larger than every witness.
fn miller_rabin<I>(candidate: &BigUint, witnesses: I) -> bool
where
    I: IntoIterator<Item = BigUint>,
{
    let one = BigUint::one();
    let candidate_minus_one = candidate - &one;
    let shift = candidate_minus_one.trailing_zeros().unwrap_or(0);
    let odd_part = &candidate_minus_one >> shift;

    'witness: for witness in witnesses {
        let mut x = witness.modpow(&odd_part, candidate);
        if x == one || x == candidate_minus_one {
            continue;
        }
        for _ in 1..shift {
            x = (&x * &x) % candidate;
            if x == candidate_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
