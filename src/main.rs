//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geoip_reader` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing one JSON response per address
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geoip_reader::initialization::init_logger_with;
use geoip_reader::{open_with, Config, GeoIpError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("geoip_reader error: {}", e);
        process::exit(2);
    }

    match run(&config).await {
        Ok(misses) => {
            if misses > 0 {
                log::info!(
                    "{} of {} address{} not found",
                    misses,
                    config.addresses.len(),
                    if config.addresses.len() == 1 { "" } else { "es" }
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("geoip_reader error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Looks up every address, printing responses to stdout.
///
/// Returns the number of addresses that were not in the database.
async fn run(config: &Config) -> Result<usize> {
    let reader = open_with(&config.database, config.open_options())
        .await
        .with_context(|| format!("Failed to open {}", config.database.display()))?;

    let mut misses = 0;
    for address in &config.addresses {
        match reader.query(config.kind, address) {
            Ok(response) => {
                let line = if config.pretty {
                    serde_json::to_string_pretty(&response)?
                } else {
                    serde_json::to_string(&response)?
                };
                println!("{}", line);
            }
            Err(GeoIpError::AddressNotFound(ip)) => {
                misses += 1;
                log::warn!("The address {} is not in the database", ip);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("{} lookup failed for {}", config.kind, address));
            }
        }
    }

    Ok(misses)
}
