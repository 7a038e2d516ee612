//! Database metadata extraction.

use maxminddb::Reader;

use super::types::DatabaseDescriptor;

/// Copies the metadata section of an opened database into a descriptor.
pub(crate) fn extract_descriptor<S: AsRef<[u8]>>(reader: &Reader<S>) -> DatabaseDescriptor {
    let metadata = &reader.metadata;
    DatabaseDescriptor {
        database_type: metadata.database_type.clone(),
        ip_version: metadata.ip_version,
        binary_format_major_version: metadata.binary_format_major_version,
        binary_format_minor_version: metadata.binary_format_minor_version,
        build_epoch: metadata.build_epoch,
        description: metadata
            .description
            .iter()
            .map(|(lang, text)| (lang.clone(), text.clone()))
            .collect(),
        languages: metadata.languages.clone(),
        node_count: metadata.node_count,
        record_size: metadata.record_size,
    }
}
