//! Shareholder identifiers.

use crate::protocol::InvalidParameterError;
use bimap::BiBTreeMap;
use math_lib::fields::PrimeField;
use num_bigint::BigUint;
use num_traits::Zero;

/// The 1-based position of a shareholder.
pub type PartyIndex = u64;

/// A type that deterministically maps a shareholder to an abscissa and vice-versa.
///
/// Abscissas are never zero and always distinct elements of the field they are built for.
#[derive(Clone, Debug)]
pub struct PartyMapper {
    party_abscissa: BiBTreeMap<PartyIndex, BigUint>,
}

impl PartyMapper {
    /// Constructs a mapper that hands abscissa `i` to shareholder `i`, for `i` in `1..=share_count`.
    pub fn new(share_count: u64, field: &PrimeField) -> Result<Self, InvalidParameterError> {
        let too_many = || InvalidParameterError::TooManyShares { shares: share_count, prime: field.prime().clone() };
        let inner_count = share_count.checked_add(1).ok_or_else(too_many)?;
        let inner_values = field.inner_elements(inner_count).map_err(|_| too_many())?;
        // Skip the first element as that's abscissa 0 and we don't want it.
        Self::with_abscissas(inner_values.into_iter().skip(1).collect(), field)
    }

    /// Constructs a mapper over caller-chosen abscissas, the first one going to shareholder 1.
    pub fn with_abscissas(abscissas: Vec<BigUint>, field: &PrimeField) -> Result<Self, InvalidParameterError> {
        if abscissas.is_empty() {
            return Err(InvalidParameterError::ZeroShares);
        }
        let mut party_abscissa = BiBTreeMap::new();
        for (party, abscissa) in (1..).zip(abscissas) {
            if abscissa.is_zero() {
                return Err(InvalidParameterError::ZeroAbscissa);
            }
            if !field.contains(&abscissa) {
                return Err(InvalidParameterError::AbscissaOutOfField);
            }
            if party_abscissa.insert_no_overwrite(party, abscissa).is_err() {
                return Err(InvalidParameterError::DuplicateAbscissas);
            }
        }
        Ok(PartyMapper { party_abscissa })
    }

    /// Gets the abscissa for a shareholder.
    pub fn abscissa(&self, party: PartyIndex) -> Option<&BigUint> {
        self.party_abscissa.get_by_left(&party)
    }

    /// Gets the shareholder for an abscissa.
    pub fn party(&self, abscissa: &BigUint) -> Option<PartyIndex> {
        self.party_abscissa.get_by_right(abscissa).copied()
    }

    /// Gets all the shareholders. Elements are guaranteed to be sorted in ascending order.
    pub fn parties(&self) -> impl Iterator<Item = PartyIndex> + '_ {
        self.party_abscissa.left_values().copied()
    }

    /// Gets all the abscissas, in shareholder order.
    pub fn abscissas(&self) -> impl Iterator<Item = &BigUint> {
        self.party_abscissa.iter().map(|(_, abscissa)| abscissa)
    }

    /// Get the total number of shareholders.
    pub fn party_count(&self) -> usize {
        self.party_abscissa.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use math_lib::modular::Prime;

    fn field(prime: u64) -> PrimeField {
        PrimeField::new(Prime::from_u64(prime).unwrap())
    }

    fn abscissas(values: &[u32]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn consistent_mapping() {
        let mapper = PartyMapper::new(3, &field(97)).unwrap();

        assert_eq!(mapper.abscissa(1), Some(&BigUint::from(1u32)));
        assert_eq!(mapper.abscissa(3), Some(&BigUint::from(3u32)));
        assert_eq!(mapper.abscissa(4), None);

        assert_eq!(mapper.party(&BigUint::from(2u32)), Some(2));
        assert_eq!(mapper.party(&BigUint::from(0u32)), None);
    }

    #[test]
    fn custom_abscissas() {
        let mapper = PartyMapper::with_abscissas(abscissas(&[42, 7, 13]), &field(97)).unwrap();

        assert_eq!(mapper.parties().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(mapper.abscissas().cloned().collect::<Vec<_>>(), abscissas(&[42, 7, 13]));
        assert_eq!(mapper.party(&BigUint::from(7u32)), Some(2));
    }

    #[test]
    fn wrap_around_detected() {
        // The boundary edge is fine.
        assert_eq!(PartyMapper::new(12, &field(13)).unwrap().party_count(), 12);

        // One past it is not.
        assert!(matches!(PartyMapper::new(13, &field(13)), Err(InvalidParameterError::TooManyShares { .. })));
    }

    #[test]
    fn invalid_abscissas() {
        let field = field(13);
        assert_eq!(
            PartyMapper::with_abscissas(abscissas(&[1, 0]), &field).unwrap_err(),
            InvalidParameterError::ZeroAbscissa
        );
        assert_eq!(
            PartyMapper::with_abscissas(abscissas(&[1, 2, 1]), &field).unwrap_err(),
            InvalidParameterError::DuplicateAbscissas
        );
        assert_eq!(
            PartyMapper::with_abscissas(abscissas(&[1, 13]), &field).unwrap_err(),
            InvalidParameterError::AbscissaOutOfField
        );
        assert_eq!(PartyMapper::with_abscissas(Vec::new(), &field).unwrap_err(), InvalidParameterError::ZeroShares);
    }
}
