//! GeoIP database opening.
//!
//! Builds a [`GeoIpReader`] over a MaxMind DB read from a path, a vendor
//! `.tar.gz` distribution, or an in-memory buffer.

mod loader;

use std::path::Path;

use crate::config::OpenOptions;
use crate::error_handling::{GeoIpError, Result};
use crate::geoip::engine::{LookupEngine, MaxMindEngine};
use crate::geoip::reader::GeoIpReader;

use loader::load_from_file;

/// Opens a database file with default options.
///
/// Engine failures (a file that is not a MaxMind DB) propagate unchanged as
/// `GeoIpError::Engine`; read failures as `GeoIpError::Io`.
pub async fn open(path: impl AsRef<Path>) -> Result<GeoIpReader> {
    open_with(path, OpenOptions::default()).await
}

/// Opens a database file with explicit options.
///
/// Gzip files are treated as `.tar.gz` distributions and unpacked first.
pub async fn open_with(path: impl AsRef<Path>, options: OpenOptions) -> Result<GeoIpReader> {
    let path = path.as_ref();
    let bytes = load_from_file(path, &options).await?;
    let engine = MaxMindEngine::from_source(bytes)?;

    log::info!(
        "Opened {} database from {} (build {})",
        engine.descriptor().database_type,
        path.display(),
        engine.descriptor().build_epoch
    );
    Ok(GeoIpReader::from_engine(engine))
}

/// Opens the `<edition>.mmdb` entry of a `.tar.gz` distribution.
pub async fn open_archive(path: impl AsRef<Path>, edition: &str) -> Result<GeoIpReader> {
    let options = OpenOptions {
        edition: Some(edition.to_string()),
        ..Default::default()
    };
    open_with(path, options).await
}

/// Opens a database held in memory.
///
/// Any engine failure is reported as `InvalidDbBuffer`, with the engine error
/// as its source.
pub fn open_buffer<S: AsRef<[u8]>>(buffer: S) -> Result<GeoIpReader<MaxMindEngine<S>>> {
    let engine = MaxMindEngine::from_source(buffer).map_err(GeoIpError::InvalidDbBuffer)?;
    log::debug!(
        "Opened {} database from buffer",
        engine.descriptor().database_type
    );
    Ok(GeoIpReader::from_engine(engine))
}
