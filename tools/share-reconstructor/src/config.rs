use math_lib::modular::Prime;
use num_bigint::BigUint;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// The main config type.
#[derive(Deserialize)]
pub struct Config {
    /// The prime number to be used. This is `P`.
    pub prime: Prime,

    /// The shares.
    pub shares: Vec<ShareConfig>,
}

impl Config {
    /// Loads the config from a file path. The format is picked from the file extension.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::with_name(path));
        builder.build()?.try_deserialize()
    }
}

/// A single share.
#[serde_as]
#[derive(Deserialize)]
pub struct ShareConfig {
    /// The abscissa the share was evaluated at.
    #[serde_as(as = "DisplayFromStr")]
    pub x: BigUint,

    /// The share itself.
    #[serde_as(as = "DisplayFromStr")]
    pub y: BigUint,
}
