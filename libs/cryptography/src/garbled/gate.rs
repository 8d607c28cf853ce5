//! Gate garbling.

use crate::garbled::{
    cipher::{Encryptor, HashCipher},
    errors::GarblingError,
    keys::WireKeyPair,
};
use rand::{seq::SliceRandom, CryptoRng, RngCore};
use tracing::debug;

/// The number of rows in the table of a two input gate.
pub const TABLE_ROWS: usize = 4;

/// A garbled truth table: the encrypted output key for every input combination, in random order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>"))]
pub struct GarbledTable {
    rows: Vec<Vec<u8>>,
}

impl GarbledTable {
    /// The encrypted rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Consumes the table and returns its rows.
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<u8>>> for GarbledTable {
    type Error = GarblingError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        if rows.len() != TABLE_ROWS {
            return Err(GarblingError::InvalidTable { rows: rows.len() });
        }
        Ok(Self { rows })
    }
}

impl From<GarbledTable> for Vec<Vec<u8>> {
    fn from(table: GarbledTable) -> Self {
        table.rows
    }
}

/// Builds garbled AND gates.
#[derive(Clone, Debug, Default)]
pub struct GateGarbler<C = HashCipher> {
    cipher: C,
}

impl<C: Encryptor> GateGarbler<C> {
    /// Constructs a garbler that encrypts rows with `cipher`.
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Garbles an AND gate.
    ///
    /// For every pair of input bits `(a, b)` the output key for `a AND b` is encrypted under the input keys for `a`
    /// and `b`. The rows are then shuffled so their position says nothing about the inputs they stand for.
    pub fn garble<R: RngCore + CryptoRng>(
        &self,
        input_a: &WireKeyPair,
        input_b: &WireKeyPair,
        output: &WireKeyPair,
        rng: &mut R,
    ) -> GarbledTable {
        let mut rows = Vec::with_capacity(TABLE_ROWS);
        for a in [false, true] {
            for b in [false, true] {
                let output_key = output.key(a & b);
                rows.push(self.cipher.encrypt(input_a.key(a), input_b.key(b), output_key.as_bytes()));
            }
        }
        rows.shuffle(rng);
        debug!("Garbled AND gate with {} rows", rows.len());
        GarbledTable { rows }
    }
}
