use anyhow::{Context, Result};
use clap::Parser;
use share_reconstructor::{config::Config, reconstruct::Reconstructor};

#[derive(Parser, Debug)]
#[clap(name = "share-reconstructor")]
struct Options {
    /// The path to the config file
    config_path: String,
}

fn main() -> Result<()> {
    let options = Options::parse();
    let config = Config::load(&options.config_path).context("loading config")?;
    let reconstructor = Reconstructor;

    let prime = config.prime;
    println!("Recovering secret from {} shares using prime {prime}", config.shares.len());
    let secret = reconstructor.reconstruct(prime, config.shares).context("reconstruction failed")?;
    println!("Secret recovered is: {secret}");
    Ok(())
}
