//! Secret Sharer.
//!
//! The three stages of a sharing round: drawing the hiding polynomial, evaluating it for every shareholder and
//! interpolating it back at zero.

pub mod polynomial;
pub mod reconstruct;
pub mod shares;

pub use polynomial::*;
pub use reconstruct::*;
pub use shares::*;
