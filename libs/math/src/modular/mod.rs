//! Modular arithmetic and prime moduli.

pub mod ops;
pub mod prime;

pub use ops::*;
pub use prime::*;
