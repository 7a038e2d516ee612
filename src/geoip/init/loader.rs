//! GeoIP database loading from files.

use std::path::Path;

use crate::config::{OpenOptions, GZIP_MAGIC};
use crate::error_handling::{GeoIpError, Result};
use crate::geoip::extract::extract_mmdb_from_tar_gz;

/// Reads database bytes from a local path, enforcing `options.max_size`.
///
/// Gzip input (a vendor `.tar.gz` distribution) is unpacked and the `.mmdb`
/// entry selected by `options.edition` is returned.
pub(crate) async fn load_from_file(path: &Path, options: &OpenOptions) -> Result<Vec<u8>> {
    log::info!("Loading GeoIP database from: {}", path.display());

    let size = tokio::fs::metadata(path).await?.len();
    if size > options.max_size {
        return Err(GeoIpError::DatabaseTooLarge {
            size,
            max: options.max_size,
        });
    }

    let bytes = tokio::fs::read(path).await?;

    if bytes.starts_with(&GZIP_MAGIC) {
        return extract_mmdb_from_tar_gz(&bytes, options.edition.as_deref(), options.max_size);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geoip::extract::tests::create_test_tar_gz;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_file_not_found() {
        let path = Path::new("nonexistent").join("GeoLite2-City.mmdb");
        let result = load_from_file(&path, &OpenOptions::default()).await;
        assert!(matches!(result, Err(GeoIpError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_from_file_plain_bytes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("db.mmdb");
        tokio::fs::write(&path, b"raw database bytes")
            .await
            .expect("Failed to write test file");

        let bytes = load_from_file(&path, &OpenOptions::default()).await.unwrap();
        assert_eq!(bytes, b"raw database bytes");
    }

    #[tokio::test]
    async fn test_load_from_file_too_large() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("db.mmdb");
        tokio::fs::write(&path, vec![0u8; 100])
            .await
            .expect("Failed to write test file");

        let options = OpenOptions {
            max_size: 10,
            ..Default::default()
        };
        match load_from_file(&path, &options).await {
            Err(GeoIpError::DatabaseTooLarge { size, max }) => {
                assert_eq!(size, 100);
                assert_eq!(max, 10);
            }
            other => panic!("expected DatabaseTooLarge, got {:?}", other.map(|b| b.len())),
        }
    }

    #[tokio::test]
    async fn test_load_from_file_unpacks_archive() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("GeoLite2-ASN.tar.gz");
        let archive = create_test_tar_gz(&[
            ("GeoLite2-ASN_20240101/LICENSE.txt", b"license"),
            ("GeoLite2-ASN_20240101/GeoLite2-ASN.mmdb", b"asn database"),
        ]);
        tokio::fs::write(&path, archive)
            .await
            .expect("Failed to write test archive");

        let options = OpenOptions {
            edition: Some("GeoLite2-ASN".to_string()),
            ..Default::default()
        };
        let bytes = load_from_file(&path, &options).await.unwrap();
        assert_eq!(bytes, b"asn database");
    }
}
