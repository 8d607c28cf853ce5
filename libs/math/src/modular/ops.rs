//! Modular operations over a prime.
//!
//! Operands are expected to already be reduced, i.e. `0 <= a, b < p`.

use super::Prime;
use crate::errors::NoInverseError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use std::mem;

/// Computes `a + b mod p`.
pub fn add(a: &BigUint, b: &BigUint, p: &Prime) -> BigUint {
    (a + b) % p.value()
}

/// Computes `a - b mod p`.
pub fn sub(a: &BigUint, b: &BigUint, p: &Prime) -> BigUint {
    let p = p.value();
    ((a % p) + p - (b % p)) % p
}

/// Computes `a * b mod p`.
pub fn mul(a: &BigUint, b: &BigUint, p: &Prime) -> BigUint {
    (a * b) % p.value()
}

/// Computes `-a mod p`.
pub fn neg(a: &BigUint, p: &Prime) -> BigUint {
    sub(&BigUint::zero(), a, p)
}

/// Computes the multiplicative inverse of `a` modulo `modulus` using the extended Euclidean algorithm.
///
/// This takes an arbitrary modulus rather than a [Prime] so that non-invertible inputs are reported instead of
/// assumed away: it fails whenever `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, NoInverseError> {
    if modulus.is_zero() {
        return Err(NoInverseError);
    }
    let modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let mut old_remainder = BigInt::from_biguint(Sign::Plus, a.clone()) % &modulus;
    let mut remainder = modulus.clone();
    let mut old_coefficient = BigInt::one();
    let mut coefficient = BigInt::zero();

    while !remainder.is_zero() {
        let quotient = &old_remainder / &remainder;
        let next_remainder = &old_remainder - &quotient * &remainder;
        old_remainder = mem::replace(&mut remainder, next_remainder);
        let next_coefficient = &old_coefficient - &quotient * &coefficient;
        old_coefficient = mem::replace(&mut coefficient, next_coefficient);
    }

    // `old_remainder` is now gcd(a, modulus) and `old_coefficient * a = gcd (mod modulus)`.
    if !old_remainder.is_one() {
        return Err(NoInverseError);
    }
    let inverse = ((old_coefficient % &modulus) + &modulus) % &modulus;
    inverse.to_biguint().ok_or(NoInverseError)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use rstest::rstest;

    fn prime(value: u64) -> Prime {
        Prime::from_u64(value).unwrap()
    }

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(1, 2, 2)]
    #[case(2, 3, 6)]
    #[case(3, 4, 1)]
    #[case(4, 4, 5)]
    #[case(10, 1, 10)]
    fn test_mult_mod_11(#[case] left: u64, #[case] right: u64, #[case] expected: u64) {
        assert_eq!(mul(&big(left), &big(right), &prime(11)), big(expected));
    }

    #[rstest]
    #[case(5, 8, 2)]
    #[case(10, 10, 9)]
    #[case(0, 0, 0)]
    #[case(0, 10, 10)]
    fn test_add_mod_11(#[case] left: u64, #[case] right: u64, #[case] expected: u64) {
        assert_eq!(add(&big(left), &big(right), &prime(11)), big(expected));
    }

    #[rstest]
    #[case(5, 8, 8)]
    #[case(8, 5, 3)]
    #[case(0, 1, 10)]
    #[case(7, 7, 0)]
    fn test_sub_mod_11(#[case] left: u64, #[case] right: u64, #[case] expected: u64) {
        assert_eq!(sub(&big(left), &big(right), &prime(11)), big(expected));
    }

    #[test]
    fn test_neg() {
        assert_eq!(neg(&big(3), &prime(11)), big(8));
        assert_eq!(neg(&big(0), &prime(11)), big(0));
    }

    #[rstest]
    #[case(3, 11, 4)]
    #[case(7, 11, 8)]
    #[case(1, 97, 1)]
    #[case(96, 97, 96)]
    #[case(2, 2089, 1045)]
    fn test_inverse(#[case] value: u64, #[case] modulus: u64, #[case] expected: u64) {
        assert_eq!(mod_inverse(&big(value), &big(modulus)).unwrap(), big(expected));
    }

    #[test]
    fn inverse_round_trip() {
        let p = prime(2089);
        for value in 1..2089u64 {
            let inverse = mod_inverse(&big(value), p.value()).unwrap();
            assert_eq!(mul(&big(value), &inverse, &p), BigUint::one());
        }
    }

    #[rstest]
    #[case(0, 11)]
    #[case(11, 11)]
    #[case(4, 12)]
    #[case(6, 9)]
    #[case(3, 0)]
    fn test_no_inverse(#[case] value: u64, #[case] modulus: u64) {
        assert_eq!(mod_inverse(&big(value), &big(modulus)), Err(NoInverseError));
    }
}
