//! Error handling.
//!
//! This module provides the error taxonomy of the reader layer:
//! - Misuse errors (query method does not match the opened database)
//! - Miss errors (address has no entry)
//! - Open errors (malformed buffers, oversized files, engine failures)

mod types;

// Re-export public API
pub use types::{GeoIpError, InitializationError};

/// Result alias used throughout the reader layer.
pub type Result<T> = std::result::Result<T, GeoIpError>;
