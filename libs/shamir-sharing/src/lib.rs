//! Threshold secret sharing over prime fields.
//!
//! A secret is hidden as the constant term of a random polynomial of degree `t - 1`, and every shareholder gets
//! one evaluation of that polynomial at a distinct non-zero abscissa. Any `t` of those points recover the secret
//! through Lagrange interpolation at zero, fewer reveal nothing about it.
//!
//! ```
//! use math_lib::modular::Prime;
//! use num_bigint::BigUint;
//! use shamir_sharing::protocol::Shamir;
//!
//! # fn test() -> Result<(), Box<dyn std::error::Error>> {
//! let shamir = Shamir::new(3, 5, Prime::from_u64(97)?)?;
//! let shares = shamir.generate_shares(&BigUint::from(42u32))?;
//! let chosen = shamir.select_shares(&shares, &[1, 3, 5])?;
//! assert_eq!(shamir.recover_secret(chosen)?, BigUint::from(42u32));
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
#![allow(clippy::module_inception)]

pub mod party;
pub mod protocol;
pub mod secret_sharer;
