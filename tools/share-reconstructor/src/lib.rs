//! Recovers a secret from Shamir shares stored in a config file.

pub mod config;
pub mod reconstruct;
