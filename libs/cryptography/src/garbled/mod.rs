//! Garbled AND gate.

pub mod cipher;
pub mod errors;
pub mod evaluator;
pub mod gate;
pub mod keys;
pub mod party;

pub use cipher::*;
pub use errors::*;
pub use evaluator::*;
pub use gate::*;
pub use keys::*;
pub use party::*;
