//! Application initialization.
//!
//! Sets up process-wide resources for the `geoip_reader` binary. The library
//! itself only logs through the `log` facade and never installs a logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
