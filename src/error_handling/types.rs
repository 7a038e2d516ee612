//! Error type definitions.
//!
//! This module defines the error taxonomy raised by the reader layer and by
//! application initialization.

use log::SetLoggerError;
use maxminddb::MaxMindDbError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while opening a database or answering a query.
///
/// Every query either returns a fully normalized response or one of these
/// variants; there is no partially populated result.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The loaded database's type does not match any pattern accepted by the
    /// invoked query method.
    ///
    /// Carries the method name, the database type reported by the database
    /// metadata, and the patterns the method accepts.
    #[error(
        "The {method} method cannot be used with the {database_type} database (accepted: {})",
        .accepted.join(", ")
    )]
    IncompatibleDatabase {
        /// Query method that was invoked, e.g. `city()`.
        method: &'static str,
        /// Database type of the opened database.
        database_type: String,
        /// Type patterns the method accepts.
        accepted: &'static [&'static str],
    },

    /// The database has no entry for the address.
    #[error("The address {0} is not in the database")]
    AddressNotFound(String),

    /// The address could not be parsed by the lookup engine.
    #[error("The value \"{0}\" is not a valid IP address")]
    InvalidAddress(String),

    /// An in-memory buffer could not be parsed as a MaxMind DB.
    ///
    /// The engine error is kept as the error source.
    #[error("Invalid database buffer: {0}")]
    InvalidDbBuffer(#[source] MaxMindDbError),

    /// The database exceeds the configured size limit.
    #[error("GeoIP database too large: {size} bytes (max: {max} bytes)")]
    DatabaseTooLarge {
        /// Size of the database in bytes.
        size: u64,
        /// Configured maximum size in bytes.
        max: u64,
    },

    /// The archive did not contain the requested `.mmdb` entry.
    #[error("{0} not found in tar.gz archive")]
    ArchiveEntryMissing(String),

    /// I/O failure while reading a database from disk.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure reported by the MaxMind DB engine.
    #[error(transparent)]
    Engine(#[from] MaxMindDbError),
}

impl GeoIpError {
    /// Returns `true` for the routine "address has no entry" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GeoIpError::AddressNotFound(_))
    }
}
