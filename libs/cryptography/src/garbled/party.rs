//! The two parties of a garbled AND gate.
//!
//! The garbler owns every wire key, the evaluator only ever sees the garbled table, one key per input wire and the
//! output decoding pair. Handing the evaluator the key for its own input stands in for an oblivious transfer.

use crate::garbled::{
    cipher::HashCipher,
    errors::GarblingError,
    evaluator::Evaluator,
    gate::{GarbledTable, GateGarbler},
    keys::{KeyGenerator, WireKey, WireKeyPair, DEFAULT_KEY_LENGTH_BITS},
};
use rand::{CryptoRng, RngCore};
use tracing::info;

/// Garbling parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GarblingConfig {
    /// The length of every wire key, in bits.
    pub key_length_bits: usize,
}

impl Default for GarblingConfig {
    fn default() -> Self {
        Self { key_length_bits: DEFAULT_KEY_LENGTH_BITS }
    }
}

/// The party that builds the gate. Its input goes on wire `a`.
pub struct GarblerParty {
    input_a: WireKeyPair,
    input_b: WireKeyPair,
    output: WireKeyPair,
    table: GarbledTable,
}

impl GarblerParty {
    /// Generates fresh keys for every wire and garbles the gate.
    pub fn new<R: RngCore + CryptoRng>(config: &GarblingConfig, rng: &mut R) -> Result<Self, GarblingError> {
        let generator = KeyGenerator::new(config.key_length_bits)?;
        let input_a = generator.generate(rng);
        let input_b = generator.generate(rng);
        let output = generator.generate(rng);
        let table = GateGarbler::new(HashCipher).garble(&input_a, &input_b, &output, rng);
        Ok(Self { input_a, input_b, output, table })
    }

    /// The garbled table, sent to the evaluator.
    pub fn table(&self) -> &GarbledTable {
        &self.table
    }

    /// The key for the garbler's own input bit, sent to the evaluator.
    pub fn input_key(&self, bit: bool) -> &WireKey {
        self.input_a.key(bit)
    }

    /// The key for the evaluator's input bit.
    ///
    /// In a real deployment this is an oblivious transfer: the evaluator learns one key and the garbler does not
    /// learn which one.
    pub fn transfer_evaluator_key(&self, bit: bool) -> &WireKey {
        self.input_b.key(bit)
    }

    /// The output decoding pair, sent to the evaluator.
    pub fn output_keys(&self) -> &WireKeyPair {
        &self.output
    }
}

/// The party that evaluates the gate. Its input goes on wire `b`.
pub struct EvaluatorParty {
    table: GarbledTable,
    garbler_key: WireKey,
    own_key: WireKey,
    output_keys: WireKeyPair,
}

impl EvaluatorParty {
    /// Collects everything the evaluator receives from the garbler.
    pub fn new(table: GarbledTable, garbler_key: WireKey, own_key: WireKey, output_keys: WireKeyPair) -> Self {
        Self { table, garbler_key, own_key, output_keys }
    }

    /// Evaluates the gate. The received table is consumed, so a party evaluates exactly once.
    ///
    /// ```compile_fail
    /// use cryptography::garbled::{EvaluatorParty, GarblerParty, GarblingConfig};
    ///
    /// let garbler = GarblerParty::new(&GarblingConfig::default(), &mut rand::thread_rng()).unwrap();
    /// let evaluator = EvaluatorParty::new(
    ///     garbler.table().clone(),
    ///     garbler.input_key(true).clone(),
    ///     garbler.transfer_evaluator_key(true).clone(),
    ///     garbler.output_keys().clone(),
    /// );
    /// let first = evaluator.evaluate();
    /// let second = evaluator.evaluate();
    /// ```
    pub fn evaluate(self) -> Result<bool, GarblingError> {
        Evaluator::new(HashCipher).evaluate(&self.table, &self.garbler_key, &self.own_key, &self.output_keys)
    }
}

/// Runs a full garbled evaluation of `input_a AND input_b`.
pub fn evaluate_and_gate<R: RngCore + CryptoRng>(
    input_a: bool,
    input_b: bool,
    config: &GarblingConfig,
    rng: &mut R,
) -> Result<bool, GarblingError> {
    let garbler = GarblerParty::new(config, rng)?;
    let evaluator = EvaluatorParty::new(
        garbler.table().clone(),
        garbler.input_key(input_a).clone(),
        garbler.transfer_evaluator_key(input_b).clone(),
        garbler.output_keys().clone(),
    );
    let output = evaluator.evaluate()?;
    info!("Garbled AND gate evaluated with {}-bit keys", config.key_length_bits);
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use crate::garbled::errors::InvalidParameterError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use rstest::rstest;

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, false)]
    fn and_gate(#[case] a: bool, #[case] b: bool, #[case] expected: bool) {
        test_logger::init();
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        assert_eq!(evaluate_and_gate(a, b, &GarblingConfig::default(), &mut rng).unwrap(), expected);
    }

    #[rstest]
    #[case(8)]
    #[case(64)]
    #[case(256)]
    fn and_gate_key_lengths(#[case] key_length_bits: usize) {
        let mut rng = ChaCha20Rng::seed_from_u64(key_length_bits as u64);
        let config = GarblingConfig { key_length_bits };
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            assert_eq!(evaluate_and_gate(a, b, &config, &mut rng).unwrap(), a & b);
        }
    }

    #[test]
    fn repeated_runs_with_thread_rng() {
        let config = GarblingConfig::default();
        for _ in 0..20 {
            assert!(evaluate_and_gate(true, true, &config, &mut rand::thread_rng()).unwrap());
        }
    }

    #[test]
    fn evaluator_consumes_its_table() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let garbler = GarblerParty::new(&GarblingConfig::default(), &mut rng).unwrap();
        let evaluator = EvaluatorParty::new(
            garbler.table().clone(),
            garbler.input_key(true).clone(),
            garbler.transfer_evaluator_key(false).clone(),
            garbler.output_keys().clone(),
        );
        let run: fn(EvaluatorParty) -> Result<bool, GarblingError> = EvaluatorParty::evaluate;
        assert!(!run(evaluator).unwrap());
    }

    #[test]
    fn invalid_key_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let config = GarblingConfig { key_length_bits: 100 };
        assert_eq!(
            evaluate_and_gate(true, true, &config, &mut rng).unwrap_err(),
            GarblingError::InvalidParameter(InvalidParameterError::KeyLength(100))
        );
    }

    #[test]
    fn evaluator_with_wrong_garbler_key() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let garbler = GarblerParty::new(&GarblingConfig::default(), &mut rng).unwrap();
        // The garbler's key used on the evaluator's wire.
        let evaluator = EvaluatorParty::new(
            garbler.table().clone(),
            garbler.transfer_evaluator_key(true).clone(),
            garbler.transfer_evaluator_key(true).clone(),
            garbler.output_keys().clone(),
        );
        assert_eq!(evaluator.evaluate().unwrap_err(), GarblingError::AmbiguousOrNoDecryption { valid_rows: 0 });
    }
}
