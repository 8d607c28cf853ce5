//! Secret reconstruction.

use crate::protocol::ShamirError;
use math_lib::{fields::PrimeField, polynomial::point_sequence::PointSequence};
use num_bigint::BigUint;
use tracing::debug;

/// Recovers a secret from shares.
pub struct Reconstructor;

impl Reconstructor {
    /// Interpolates the shares at zero.
    ///
    /// The number of shares is not checked against the sharing threshold: handing in fewer shares than the
    /// threshold yields a field element that is almost certainly not the secret, and that cannot be detected here.
    pub fn reconstruct(shares: &PointSequence, field: &PrimeField) -> Result<BigUint, ShamirError> {
        debug!("Reconstructing secret from {} shares", shares.len());
        Ok(shares.lagrange_interpolate(field)?)
    }
}
