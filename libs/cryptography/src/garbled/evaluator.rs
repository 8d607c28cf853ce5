//! Garbled gate evaluation.

use crate::garbled::{
    cipher::{Decryptor, HashCipher},
    errors::GarblingError,
    gate::GarbledTable,
    keys::{WireKey, WireKeyPair},
};
use tracing::{debug, warn};

/// Opens garbled tables.
#[derive(Clone, Debug, Default)]
pub struct Evaluator<C = HashCipher> {
    cipher: C,
}

impl<C: Decryptor> Evaluator<C> {
    /// Constructs an evaluator that decrypts rows with `cipher`.
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Opens the one row that `key_a` and `key_b` decrypt and returns the output key it holds.
    ///
    /// Every row is tried, so the time taken does not depend on where the matching row is.
    pub fn evaluate_key(
        &self,
        table: &GarbledTable,
        key_a: &WireKey,
        key_b: &WireKey,
    ) -> Result<WireKey, GarblingError> {
        let mut opened: Vec<Vec<u8>> =
            table.rows().iter().filter_map(|row| self.cipher.decrypt(key_a, key_b, row)).collect();
        let valid_rows = opened.len();
        match (opened.pop(), valid_rows) {
            (Some(payload), 1) => Ok(WireKey::new(payload)),
            _ => {
                warn!("{valid_rows} garbled rows decrypted, expected exactly one");
                Err(GarblingError::AmbiguousOrNoDecryption { valid_rows })
            }
        }
    }

    /// Evaluates the gate and decodes the output key into a bit.
    pub fn evaluate(
        &self,
        table: &GarbledTable,
        key_a: &WireKey,
        key_b: &WireKey,
        output_keys: &WireKeyPair,
    ) -> Result<bool, GarblingError> {
        let output_key = self.evaluate_key(table, key_a, key_b)?;
        let bit = output_keys.bit_for(&output_key).ok_or(GarblingError::UnknownOutputKey)?;
        debug!("Evaluated garbled gate");
        Ok(bit)
    }
}
