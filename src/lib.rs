//! geoip_reader library: normalized GeoIP2/GeoLite2 lookups
//!
//! This library wraps a MaxMind DB reader and turns its raw, loosely-typed
//! records into stable, field-complete, camelCased responses. Each query
//! method checks that the opened database is of a matching type, fails with
//! a precise error when the address is missing, and fills deterministic
//! defaults for absent fields.
//!
//! # Example
//!
//! ```no_run
//! use geoip_reader::{open, GeoIpError};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = open("GeoLite2-City.mmdb").await?;
//!
//! match reader.city("81.2.69.160") {
//!     Ok(response) => println!("{}", serde_json::to_string(&response)?),
//!     Err(GeoIpError::AddressNotFound(ip)) => println!("{} is not in the database", ip),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Opening a database from a path is async and needs a Tokio runtime.
//! Buffer opening and all queries are synchronous.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod geoip;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OpenOptions};
pub use error_handling::{GeoIpError, InitializationError, Result};
pub use geoip::*;
