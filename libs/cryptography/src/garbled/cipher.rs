//! Row encryption.
//!
//! Each row of a garbled table is encrypted under two keys at once, one per input wire. A row can only be opened by
//! someone holding both keys, and opening it with any other pair is detected.

use crate::garbled::keys::WireKey;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// The number of zero bytes appended to every payload before encryption.
pub const TAG_LENGTH: usize = 16;

const DOMAIN: &[u8] = b"garbled-gate-row";
const ZERO_TAG: [u8; TAG_LENGTH] = [0; TAG_LENGTH];
const BLOCK_LENGTH: usize = 32;

/// Encrypts a payload under two keys.
pub trait Encryptor {
    /// Encrypts `payload` so that it can only be recovered with both `key_a` and `key_b`.
    fn encrypt(&self, key_a: &WireKey, key_b: &WireKey, payload: &[u8]) -> Vec<u8>;
}

/// Decrypts a payload encrypted under two keys.
pub trait Decryptor {
    /// Recovers the payload, or `None` if the integrity check fails because the keys are not the ones the
    /// ciphertext was produced with.
    fn decrypt(&self, key_a: &WireKey, key_b: &WireKey, ciphertext: &[u8]) -> Option<Vec<u8>>;
}

/// A stream cipher built out of SHA-256 in counter mode, with a zero tag for integrity.
///
/// Block `i` of the keystream is `SHA-256(domain || len(a) || a || len(b) || b || i)` with lengths and counter
/// encoded as big endian u64s. The ciphertext is the keystream XORed with `payload || 0^16`. Decrypting with the
/// wrong pair of keys yields an all-zero tag with probability 2^-128.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashCipher;

impl HashCipher {
    fn apply_keystream(key_a: &WireKey, key_b: &WireKey, data: &mut [u8]) {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN);
        hasher.update((key_a.len() as u64).to_be_bytes());
        hasher.update(key_a.as_bytes());
        hasher.update((key_b.len() as u64).to_be_bytes());
        hasher.update(key_b.as_bytes());

        for (counter, chunk) in (0u64..).zip(data.chunks_mut(BLOCK_LENGTH)) {
            let mut block_hasher = hasher.clone();
            block_hasher.update(counter.to_be_bytes());
            let block = block_hasher.finalize();
            for (byte, key_byte) in chunk.iter_mut().zip(block.iter()) {
                *byte ^= key_byte;
            }
        }
    }
}

impl Encryptor for HashCipher {
    fn encrypt(&self, key_a: &WireKey, key_b: &WireKey, payload: &[u8]) -> Vec<u8> {
        let mut data = Vec::with_capacity(payload.len() + TAG_LENGTH);
        data.extend_from_slice(payload);
        data.extend_from_slice(&ZERO_TAG);
        Self::apply_keystream(key_a, key_b, &mut data);
        data
    }
}

impl Decryptor for HashCipher {
    fn decrypt(&self, key_a: &WireKey, key_b: &WireKey, ciphertext: &[u8]) -> Option<Vec<u8>> {
        let payload_length = ciphertext.len().checked_sub(TAG_LENGTH)?;
        let mut data = ciphertext.to_vec();
        Self::apply_keystream(key_a, key_b, &mut data);
        let tag = data.split_off(payload_length);
        if bool::from(tag.as_slice().ct_eq(ZERO_TAG.as_slice())) { Some(data) } else { None }
    }
}
