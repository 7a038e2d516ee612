//! Database type compatibility check.
//!
//! Runs before every lookup so a mismatched method fails even for addresses
//! that are not in the database.

use super::schema::accepted_types_for;
use super::types::{DatabaseDescriptor, QueryKind};
use crate::error_handling::{GeoIpError, Result};

/// Returns `true` if `database_type` contains any of `patterns`.
pub fn type_matches(database_type: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|pattern| database_type.contains(pattern))
}

/// Fails with `IncompatibleDatabase` unless the descriptor's type is accepted
/// by `kind`.
pub fn check_compatible(descriptor: &DatabaseDescriptor, kind: QueryKind) -> Result<()> {
    let accepted = accepted_types_for(kind);
    if type_matches(&descriptor.database_type, accepted) {
        return Ok(());
    }

    log::warn!(
        "{} called on a {} database (accepted: {})",
        kind.method_name(),
        descriptor.database_type,
        accepted.join(", ")
    );
    Err(GeoIpError::IncompatibleDatabase {
        method: kind.method_name(),
        database_type: descriptor.database_type.clone(),
        accepted,
    })
}
