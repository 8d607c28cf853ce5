use crate::config::ShareConfig;
use anyhow::Result;
use math_lib::{
    fields::PrimeField,
    modular::Prime,
    polynomial::{point::Point, point_sequence::PointSequence},
};
use num_bigint::BigUint;
use shamir_sharing::secret_sharer::Reconstructor as SecretReconstructor;

/// Performs reconstruction of shares into the secret behind them.
#[derive(Default)]
pub struct Reconstructor;

impl Reconstructor {
    /// Reconstructs the given shares using the provided prime as `P`.
    ///
    /// All shares are used, so there must be at least as many as the threshold they were generated with.
    pub fn reconstruct(&self, prime: Prime, shares: Vec<ShareConfig>) -> Result<BigUint> {
        let field = PrimeField::new(prime);
        let points: PointSequence = shares.into_iter().map(|share| Point::new(share.x, share.y)).collect();
        let secret = SecretReconstructor::reconstruct(&points, &field)?;
        Ok(secret)
    }
}
