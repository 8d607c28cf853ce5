//! Wire keys.

use crate::garbled::errors::InvalidParameterError;
use rand::{CryptoRng, RngCore};
use std::fmt;
use subtle::ConstantTimeEq;

/// The key length used when none is configured.
pub const DEFAULT_KEY_LENGTH_BITS: usize = 128;

/// A random label standing in for one value of a wire.
///
/// Comparisons run in constant time and the key bytes are never printed.
#[derive(Clone)]
pub struct WireKey(Vec<u8>);

impl WireKey {
    /// Wraps raw key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Generates a random key of `length` bytes.
    pub fn gen_random_with_rng<R: RngCore + CryptoRng>(length: usize, rng: &mut R) -> Self {
        let mut bytes = vec![0; length];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// The key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the key and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for WireKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl PartialEq for WireKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl Eq for WireKey {}

impl fmt::Debug for WireKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WireKey(<{} bytes>)", self.0.len())
    }
}

/// The two keys of a wire: one for value 0, one for value 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireKeyPair {
    zero: WireKey,
    one: WireKey,
}

impl WireKeyPair {
    /// Builds a pair out of the keys for 0 and 1.
    pub fn new(zero: WireKey, one: WireKey) -> Self {
        Self { zero, one }
    }

    /// The key for `bit`.
    pub fn key(&self, bit: bool) -> &WireKey {
        if bit { &self.one } else { &self.zero }
    }

    /// The key for value 0.
    pub fn zero(&self) -> &WireKey {
        &self.zero
    }

    /// The key for value 1.
    pub fn one(&self) -> &WireKey {
        &self.one
    }

    /// Decodes a key back into the bit it stands for.
    pub fn bit_for(&self, key: &WireKey) -> Option<bool> {
        if *key == self.zero {
            Some(false)
        } else if *key == self.one {
            Some(true)
        } else {
            None
        }
    }
}

/// Generates wire key pairs of a fixed length.
#[derive(Clone, Copy, Debug)]
pub struct KeyGenerator {
    key_length: usize,
}

impl KeyGenerator {
    /// Constructs a generator for keys of `key_length_bits` bits.
    pub fn new(key_length_bits: usize) -> Result<Self, InvalidParameterError> {
        if key_length_bits == 0 || key_length_bits % 8 != 0 {
            return Err(InvalidParameterError::KeyLength(key_length_bits));
        }
        Ok(Self { key_length: key_length_bits / 8 })
    }

    /// The key length in bytes.
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Generates the two keys of a wire.
    ///
    /// The key for 1 is redrawn until it differs from the key for 0, otherwise the wire could not be decoded. This
    /// only matters for very short keys.
    pub fn generate<R: RngCore + CryptoRng>(&self, rng: &mut R) -> WireKeyPair {
        let zero = WireKey::gen_random_with_rng(self.key_length, rng);
        let mut one = WireKey::gen_random_with_rng(self.key_length, rng);
        while one == zero {
            one = WireKey::gen_random_with_rng(self.key_length, rng);
        }
        WireKeyPair { zero, one }
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self { key_length: DEFAULT_KEY_LENGTH_BITS / 8 }
    }
}

/// Generates the two keys of a wire, each `key_length_bits` long.
pub fn generate_wire_keys<R: RngCore + CryptoRng>(
    key_length_bits: usize,
    rng: &mut R,
) -> Result<WireKeyPair, InvalidParameterError> {
    Ok(KeyGenerator::new(key_length_bits)?.generate(rng))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use rstest::rstest;

    #[rstest]
    #[case(8, 1)]
    #[case(128, 16)]
    #[case(256, 32)]
    fn key_lengths(#[case] bits: usize, #[case] bytes: usize) {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let pair = generate_wire_keys(bits, &mut rng).unwrap();
        assert_eq!(pair.zero().len(), bytes);
        assert_eq!(pair.one().len(), bytes);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(129)]
    fn invalid_key_lengths(#[case] bits: usize) {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(generate_wire_keys(bits, &mut rng).unwrap_err(), InvalidParameterError::KeyLength(bits));
    }

    #[test]
    fn keys_are_distinct() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let generator = KeyGenerator::new(8).unwrap();
        for _ in 0..1000 {
            let pair = generator.generate(&mut rng);
            assert_ne!(pair.zero(), pair.one());
        }
    }

    #[test]
    fn pairs_are_independent() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let generator = KeyGenerator::default();
        let first = generator.generate(&mut rng);
        let second = generator.generate(&mut rng);
        assert_ne!(first, second);
        assert_eq!(generator.key_length(), 16);
    }

    #[test]
    fn decode_bits() {
        let pair = WireKeyPair::new(WireKey::new(vec![1, 2]), WireKey::new(vec![3, 4]));
        assert_eq!(pair.bit_for(&WireKey::new(vec![1, 2])), Some(false));
        assert_eq!(pair.bit_for(&WireKey::new(vec![3, 4])), Some(true));
        assert_eq!(pair.bit_for(&WireKey::new(vec![3, 4, 5])), None);
        assert_eq!(pair.key(true), pair.one());
    }

    #[test]
    fn debug_hides_key() {
        let key = WireKey::new(vec![0xde, 0xad]);
        assert_eq!(format!("{key:?}"), "WireKey(<2 bytes>)");
    }
}
