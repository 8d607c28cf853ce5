//! Garbled circuits.
//!
//! Two parties jointly compute a boolean gate without revealing their input bits to each other. The garbler replaces
//! every wire value with a random key and publishes an encrypted truth table, the evaluator holds exactly one key per
//! input wire and can open exactly one row of it.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
#![allow(clippy::module_inception)]

pub mod garbled;
