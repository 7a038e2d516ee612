//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for opening databases.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_MAX_DATABASE_SIZE;
use crate::geoip::QueryKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Options for opening a database from a path.
///
/// # Examples
///
/// ```
/// use geoip_reader::config::OpenOptions;
///
/// let options = OpenOptions {
///     edition: Some("GeoLite2-City".to_string()),
///     ..Default::default()
/// };
/// assert!(options.max_size > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOptions {
    /// Upper bound on the database size in bytes (file size, or extracted
    /// size for archives).
    pub max_size: u64,

    /// Edition to extract from a `.tar.gz` distribution (e.g. `GeoLite2-City`).
    /// When `None`, the first `.mmdb` entry in the archive is used.
    pub edition: Option<String>,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_DATABASE_SIZE,
            edition: None,
        }
    }
}

/// Error returned by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending option.
    pub field: &'static str,
    /// Actionable description of the problem.
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Command-line options of the `geoip_reader` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geoip_reader",
    about = "Look up IP addresses in a MaxMind DB and print normalized JSON responses"
)]
pub struct Config {
    /// Query method to run against the database
    #[arg(value_enum)]
    pub kind: QueryKind,

    /// IP addresses to look up
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Path to the .mmdb file or a .tar.gz distribution
    #[arg(long, short = 'd')]
    pub database: PathBuf,

    /// Edition to extract from a .tar.gz distribution (e.g. GeoLite2-City)
    #[arg(long)]
    pub edition: Option<String>,

    /// Maximum database size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_DATABASE_SIZE)]
    pub max_database_size: u64,

    /// Pretty-print JSON responses
    #[arg(long)]
    pub pretty: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Checks option values that clap cannot validate on its own.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_database_size == 0 {
            return Err(ConfigValidationError {
                field: "max_database_size",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.addresses.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigValidationError {
                field: "addresses",
                message: "addresses must not be empty strings".to_string(),
            });
        }
        if let Some(edition) = &self.edition {
            if edition.is_empty() || edition.contains('/') {
                return Err(ConfigValidationError {
                    field: "edition",
                    message: format!(
                        "'{}' is not an edition name (expected e.g. GeoLite2-City)",
                        edition
                    ),
                });
            }
        }
        Ok(())
    }

    /// Builds the open options described by this configuration.
    pub fn open_options(&self) -> OpenOptions {
        OpenOptions {
            max_size: self.max_database_size,
            edition: self.edition.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config::parse_from([
            "geoip_reader",
            "--database",
            "GeoLite2-City.mmdb",
            "city",
            "8.8.8.8",
        ])
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_open_options_default() {
        let options = OpenOptions::default();
        assert_eq!(options.max_size, DEFAULT_MAX_DATABASE_SIZE);
        assert!(options.edition.is_none());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let mut config = base_config();
        config.max_database_size = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_database_size");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_blank_address() {
        let mut config = base_config();
        config.addresses.push("  ".to_string());
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "addresses");
    }

    #[test]
    fn test_validate_rejects_path_like_edition() {
        let mut config = base_config();
        config.edition = Some("dir/GeoLite2-City".to_string());
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "edition");
        assert!(err.to_string().contains("GeoLite2-City"));
    }

    #[test]
    fn test_open_options_from_config() {
        let mut config = base_config();
        config.edition = Some("GeoLite2-ASN".to_string());
        config.max_database_size = 4096;
        let options = config.open_options();
        assert_eq!(options.max_size, 4096);
        assert_eq!(options.edition.as_deref(), Some("GeoLite2-ASN"));
    }
}
