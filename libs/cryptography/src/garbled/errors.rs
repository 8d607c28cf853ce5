//! Garbling errors.

use thiserror::Error;

/// A parameter handed to the garbling scheme is outside of its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameterError {
    /// Keys must be made of whole, non-zero bytes.
    #[error("key length must be a positive multiple of 8 bits, got {0}")]
    KeyLength(usize),
}

/// Garbling or evaluation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GarblingError {
    /// A parameter is invalid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameterError),

    /// The held keys did not open exactly one row of the table.
    ///
    /// Either the keys do not belong to this table, or the table has been tampered with.
    #[error("expected exactly one row to decrypt, {valid_rows} did")]
    AmbiguousOrNoDecryption {
        /// The number of rows that passed the integrity check.
        valid_rows: usize,
    },

    /// The decrypted row holds a key that is not one of the output wire keys.
    #[error("decrypted key matches neither output key")]
    UnknownOutputKey,

    /// A garbled table must have one row per input combination.
    #[error("garbled table must have 4 rows, got {rows}")]
    InvalidTable {
        /// The number of rows provided.
        rows: usize,
    },
}
