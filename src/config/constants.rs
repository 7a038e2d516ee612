//! Configuration constants.
//!
//! This module defines the size limits and well-known key names used by the
//! reader layer.

/// Maximum size of a database file accepted by `open_with` by default (1 GiB).
/// GeoIP2 Enterprise, the largest MaxMind edition, is well below this.
pub const DEFAULT_MAX_DATABASE_SIZE: u64 = 1024 * 1024 * 1024;

/// Output key under which the queried address is stamped.
pub const IP_ADDRESS_KEY: &str = "ipAddress";

/// Gzip magic number, used to detect `.tar.gz` distributions.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// File extension of MaxMind DB files inside vendor archives.
pub const MMDB_EXTENSION: &str = ".mmdb";
