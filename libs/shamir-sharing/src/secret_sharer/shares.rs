//! Share generation.

use crate::{
    party::PartyMapper,
    protocol::{InvalidParameterError, ShamirError},
};
use math_lib::{
    fields::PrimeField,
    polynomial::{point::Point, point_sequence::PointSequence, Polynomial},
};
use tracing::debug;

/// Evaluates a hiding polynomial once per shareholder.
pub struct ShareGenerator;

impl ShareGenerator {
    /// Produces `share_count` shares at abscissas `1..=share_count`.
    pub fn generate(
        polynomial: &Polynomial,
        share_count: u64,
        field: &PrimeField,
    ) -> Result<PointSequence, ShamirError> {
        let mapper = PartyMapper::new(share_count, field)?;
        Self::generate_for(polynomial, &mapper, field)
    }

    /// Produces one share per shareholder known to the mapper, in shareholder order.
    ///
    /// There must be at least as many shareholders as the polynomial has coefficients, otherwise the secret could
    /// never be recovered.
    pub fn generate_for(
        polynomial: &Polynomial,
        mapper: &PartyMapper,
        field: &PrimeField,
    ) -> Result<PointSequence, ShamirError> {
        let threshold = polynomial.coefficients().len() as u64;
        let shares = mapper.party_count() as u64;
        if threshold == 0 {
            return Err(InvalidParameterError::ZeroThreshold.into());
        }
        if threshold > shares {
            return Err(InvalidParameterError::ThresholdTooLarge { threshold, shares }.into());
        }
        let points: PointSequence =
            mapper.abscissas().map(|x| Point::new(x.clone(), polynomial.eval_at(field, x))).collect();
        debug!("Generated {} shares for threshold {threshold}", points.len());
        Ok(points)
    }
}
