//! Polynomial in Finite Field.

use crate::fields::PrimeField;
use num_bigint::BigUint;

/// Polynomial Expression.
///
/// Coefficients are stored from the constant term upwards, so `coefficients()[i]` multiplies `x^i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    /// Coefficients of the polynomial.
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Creates a new polynomial expression.
    pub fn new(coefficients: Vec<BigUint>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// Add a coefficient to the polynomial.
    pub fn add_coefficient(&mut self, coefficient: BigUint) {
        self.coefficients.push(coefficient);
    }

    /// Check if polynomial is empty.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Get coefficients.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Get the constant term, if there is one.
    pub fn constant_term(&self) -> Option<&BigUint> {
        self.coefficients.first()
    }

    /// Get the degree of the polynomial.
    ///
    /// This is based on the number of stored coefficients, leading zeros included.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x` by summing `a_i * x^i`.
    pub fn eval_at(&self, field: &PrimeField, x: &BigUint) -> BigUint {
        let x = field.reduce(x);
        let mut eval = field.zero();
        let mut power = field.one();
        for coefficient in &self.coefficients {
            let term = field.mul(&field.reduce(coefficient), &power);
            eval = field.add(&eval, &term);
            power = field.mul(&power, &x);
        }
        eval
    }
}
