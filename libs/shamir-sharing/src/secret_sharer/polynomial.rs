//! Hiding polynomial generation.

use crate::protocol::{InvalidParameterError, ShamirError};
use math_lib::{fields::PrimeField, polynomial::Polynomial};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// Draws the random polynomial that hides a secret.
pub struct PolynomialGenerator;

impl PolynomialGenerator {
    /// Builds a polynomial of degree `threshold - 1` whose constant term is the secret.
    ///
    /// Every other coefficient is drawn independently and uniformly from the field, so the leading one may be zero
    /// and the effective degree lower. That does not affect correctness or secrecy.
    pub fn generate<R: RngCore + CryptoRng>(
        secret: &BigUint,
        threshold: u64,
        field: &PrimeField,
        rng: &mut R,
    ) -> Result<Polynomial, ShamirError> {
        if threshold == 0 {
            return Err(InvalidParameterError::ZeroThreshold.into());
        }
        if !field.contains(secret) {
            return Err(InvalidParameterError::SecretTooLarge { prime: field.prime().clone() }.into());
        }
        let mut polynomial = Polynomial::new(vec![secret.clone()]);
        for _ in 1..threshold {
            polynomial.add_coefficient(field.gen_random_element(rng));
        }
        Ok(polynomial)
    }
}
