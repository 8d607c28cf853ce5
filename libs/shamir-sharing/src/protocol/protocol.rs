//! Shamir Secret Sharing Protocol

use crate::{
    party::{PartyIndex, PartyMapper},
    protocol::{InvalidParameterError, ShamirConfig, ShamirError},
    secret_sharer::{PolynomialGenerator, Reconstructor, ShareGenerator},
};
use math_lib::{
    fields::PrimeField,
    modular::Prime,
    polynomial::{point::Point, point_sequence::PointSequence},
};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::{cmp::max, collections::HashSet};
use tracing::debug;

/// Shamir Secret Sharing Protocol
///
/// Holds the threshold, the field and the shareholder abscissas of a sharing session. A session is immutable and can
/// share any number of secrets.
#[derive(Clone, Debug)]
pub struct Shamir {
    /// The number of shares needed to recover a secret.
    threshold: u64,

    /// The field every value lives in.
    field: PrimeField,

    /// The type used to map shareholders to abscissas.
    mapper: PartyMapper,
}

impl Shamir {
    /// Creates a new session handing out shares at abscissas `1..=share_count`.
    pub fn new(threshold: u64, share_count: u64, prime: Prime) -> Result<Self, ShamirError> {
        let field = PrimeField::new(prime);
        let mapper = PartyMapper::new(share_count, &field)?;
        Self::build(threshold, field, mapper)
    }

    /// Creates a new session handing out shares at the given abscissas.
    pub fn with_abscissas(threshold: u64, abscissas: Vec<BigUint>, prime: Prime) -> Result<Self, ShamirError> {
        let field = PrimeField::new(prime);
        let mapper = PartyMapper::with_abscissas(abscissas, &field)?;
        Self::build(threshold, field, mapper)
    }

    /// Creates a new session over the smallest prime able to hold both the secret and every abscissa.
    pub fn for_secret(secret: &BigUint, threshold: u64, share_count: u64) -> Result<Self, ShamirError> {
        let bound = max(secret.clone(), BigUint::from(share_count));
        let prime = Prime::next_above(&bound);
        debug!("Selected prime {prime} for sharing");
        Self::new(threshold, share_count, prime)
    }

    /// Creates a new session from its configuration.
    pub fn from_config(config: ShamirConfig) -> Result<Self, ShamirError> {
        Self::new(config.threshold, config.share_count, config.prime.unwrap_or_default())
    }

    fn build(threshold: u64, field: PrimeField, mapper: PartyMapper) -> Result<Self, ShamirError> {
        let shares = mapper.party_count() as u64;
        if threshold == 0 {
            return Err(InvalidParameterError::ZeroThreshold.into());
        }
        if threshold > shares {
            return Err(InvalidParameterError::ThresholdTooLarge { threshold, shares }.into());
        }
        Ok(Self { threshold, field, mapper })
    }

    /// Gets the number of shares needed to recover a secret.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// The number of shares handed out for every secret.
    pub fn share_count(&self) -> usize {
        self.mapper.party_count()
    }

    /// Gets the field.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Gets the field prime.
    pub fn prime(&self) -> &Prime {
        self.field.prime()
    }

    /// Gets the party mapper.
    pub fn party_mapper(&self) -> &PartyMapper {
        &self.mapper
    }

    /// Generate the Shares from a secret using the thread local random number generator.
    pub fn generate_shares(&self, secret: &BigUint) -> Result<PointSequence, ShamirError> {
        self.generate_shares_with_rng(secret, &mut rand::thread_rng())
    }

    /// Generate the Shares from a secret.
    pub fn generate_shares_with_rng<R: RngCore + CryptoRng>(
        &self,
        secret: &BigUint,
        rng: &mut R,
    ) -> Result<PointSequence, ShamirError> {
        let polynomial = PolynomialGenerator::generate(secret, self.threshold, &self.field, rng)?;
        ShareGenerator::generate_for(&polynomial, &self.mapper, &self.field)
    }

    /// Recover the secret from the given Shares.
    ///
    /// Passing fewer than `threshold` shares is not an error, the result is simply not the secret.
    pub fn recover_secret<I>(&self, shares: I) -> Result<BigUint, ShamirError>
    where
        I: IntoIterator<Item = Point>,
    {
        let shares: PointSequence = shares.into_iter().collect();
        if (shares.len() as u64) < self.threshold {
            debug!("Recovering from {} shares, below threshold {}", shares.len(), self.threshold);
        }
        Reconstructor::reconstruct(&shares, &self.field)
    }

    /// Picks shares by the 1-based index of their shareholder.
    pub fn select_shares(&self, shares: &PointSequence, indices: &[PartyIndex]) -> Result<Vec<Point>, ShamirError> {
        let mut seen = HashSet::new();
        let mut selected = Vec::with_capacity(indices.len());
        for index in indices {
            if !seen.insert(*index) {
                return Err(InvalidParameterError::DuplicateShareSelection(*index).into());
            }
            let abscissa = self.mapper.abscissa(*index).ok_or(InvalidParameterError::UnknownShare(*index))?;
            let share = shares
                .points()
                .iter()
                .find(|point| point.x() == abscissa)
                .ok_or(InvalidParameterError::UnknownShare(*index))?;
            selected.push(share.clone());
        }
        Ok(selected)
    }
}
