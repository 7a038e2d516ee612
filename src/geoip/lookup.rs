//! IP address lookup.
//!
//! Turns the engine's tagged optional into either a raw record or an
//! `AddressNotFound` error.

use super::engine::LookupEngine;
use super::types::RawRecord;
use crate::error_handling::{GeoIpError, Result};

/// Looks up `address` and fails with `AddressNotFound` when the engine has no
/// entry. An empty record is a valid result.
pub fn lookup<E: LookupEngine + ?Sized>(engine: &E, address: &str) -> Result<RawRecord> {
    match engine.get(address)? {
        Some(record) => {
            log::debug!("Found {} ({} top-level keys)", address, record.len());
            Ok(record)
        }
        None => {
            log::debug!("No entry for {}", address);
            Err(GeoIpError::AddressNotFound(address.to_string()))
        }
    }
}
