//! Definitions for fields.

use crate::{
    errors::{NoInverseError, NotAFieldElement, TooManyElements},
    modular::{self, Prime},
};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use std::fmt::{Debug, Formatter};

/// The finite field of integers modulo a prime.
///
/// Elements are represented as [BigUint] values in `[0, p)`. Every operation expects its operands to already be
/// reduced; use [PrimeField::element] to validate values that come from outside.
///
/// # Examples
///
/// ```
/// use math_lib::{fields::PrimeField, modular::Prime};
/// use num_bigint::BigUint;
///
/// # fn test() -> anyhow::Result<()> {
/// let field = PrimeField::new(Prime::from_u64(11)?);
/// let three = field.element(BigUint::from(3u32))?;
/// let four = field.inv(&three)?;
/// assert_eq!(field.mul(&three, &four), BigUint::from(1u32));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeField {
    prime: Prime,
}

impl Debug for PrimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrimeField<{}>", self.prime)
    }
}

impl PrimeField {
    /// Constructs the field over the given prime.
    pub fn new(prime: Prime) -> Self {
        Self { prime }
    }

    /// The prime this field is defined over.
    pub fn prime(&self) -> &Prime {
        &self.prime
    }

    /// The modulo being used.
    pub fn modulo(&self) -> &BigUint {
        self.prime.value()
    }

    /// The additive identity.
    pub fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    /// The multiplicative identity.
    pub fn one(&self) -> BigUint {
        BigUint::one()
    }

    /// Checks whether `value` is a canonical element of this field.
    pub fn contains(&self, value: &BigUint) -> bool {
        value < self.modulo()
    }

    /// Validates that `value` is a canonical element of this field.
    pub fn element(&self, value: BigUint) -> Result<BigUint, NotAFieldElement> {
        if self.contains(&value) { Ok(value) } else { Err(NotAFieldElement) }
    }

    /// Reduces any integer into this field.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % self.modulo()
    }

    /// Field addition.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        modular::add(a, b, &self.prime)
    }

    /// Field subtraction.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        modular::sub(a, b, &self.prime)
    }

    /// Field multiplication.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        modular::mul(a, b, &self.prime)
    }

    /// Additive inverse.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        modular::neg(a, &self.prime)
    }

    /// Multiplicative inverse, fails for zero.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, NoInverseError> {
        modular::mod_inverse(a, self.modulo())
    }

    /// Field division, fails when dividing by zero.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, NoInverseError> {
        Ok(self.mul(a, &self.inv(b)?))
    }

    /// Raises `base` to `exponent`.
    pub fn pow(&self, base: &BigUint, exponent: u64) -> BigUint {
        base.modpow(&BigUint::from(exponent), self.modulo())
    }

    /// Get the first N elements in this field, starting at zero.
    pub fn inner_elements(&self, total: u64) -> Result<Vec<BigUint>, TooManyElements> {
        if BigUint::from(total) > *self.modulo() {
            return Err(TooManyElements(total));
        }
        Ok((0..total).map(BigUint::from).collect())
    }

    /// Generates a uniformly random element using the provided random number generator.
    pub fn gen_random_element<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(self.modulo())
    }
}

impl From<Prime> for PrimeField {
    fn from(prime: Prime) -> Self {
        Self::new(prime)
    }
}
