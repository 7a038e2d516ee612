//! Archive extraction utilities.
//!
//! This module extracts `.mmdb` files from the `.tar.gz` distributions MaxMind
//! publishes.

use std::io::Read;

use flate2::read::GzDecoder;
use tar::Archive;

use crate::config::MMDB_EXTENSION;
use crate::error_handling::{GeoIpError, Result};

/// Extracts an `.mmdb` file from a tar.gz archive.
///
/// # Arguments
///
/// * `tar_gz_bytes` - The tar.gz archive bytes
/// * `db_name` - Edition to look for (e.g. "GeoLite2-City"); `None` takes the
///   first `.mmdb` entry
/// * `max_size` - Largest entry size accepted, in bytes
pub(crate) fn extract_mmdb_from_tar_gz(
    tar_gz_bytes: &[u8],
    db_name: Option<&str>,
    max_size: u64,
) -> Result<Vec<u8>> {
    log::debug!("Extracting .mmdb file from tar.gz archive");

    let expected_name = db_name.map(|name| format!("{}{}", name, MMDB_EXTENSION));
    let mut tar_archive = Archive::new(GzDecoder::new(tar_gz_bytes));

    for entry_result in tar_archive.entries()? {
        let entry = entry_result?;
        let file_name = match entry.path()?.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        let matches = match &expected_name {
            Some(expected) => &file_name == expected,
            None => file_name.ends_with(MMDB_EXTENSION),
        };
        if !matches {
            continue;
        }

        let size = entry.header().size()?;
        if size > max_size {
            return Err(GeoIpError::DatabaseTooLarge {
                size,
                max: max_size,
            });
        }

        // The header size is untrusted; `take` bounds the read instead
        let mut mmdb_bytes = Vec::new();
        entry.take(max_size).read_to_end(&mut mmdb_bytes)?;
        log::info!(
            "Extracted {} from tar.gz ({} bytes)",
            file_name,
            mmdb_bytes.len()
        );
        return Ok(mmdb_bytes);
    }

    Err(GeoIpError::ArchiveEntryMissing(
        expected_name.unwrap_or_else(|| format!("*{}", MMDB_EXTENSION)),
    ))
}
