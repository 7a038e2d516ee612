//! Boundary with the lookup engine.
//!
//! The reader layer never decodes the database itself. It talks to an engine
//! that can answer "what is stored for this address" and "what database is
//! loaded". [`MaxMindEngine`] is the production engine; tests and callers can
//! plug in their own.

use std::net::IpAddr;
use std::sync::Arc;

use maxminddb::{MaxMindDbError, Reader};

use super::metadata::extract_descriptor;
use super::types::{DatabaseDescriptor, RawRecord};
use crate::error_handling::{GeoIpError, Result};

/// An opened database that can be queried by address.
///
/// Implementations must distinguish "no entry" (`Ok(None)`) from "entry with
/// no data" (`Ok(Some(empty))`).
pub trait LookupEngine {
    /// Returns the raw record stored for `address`, or `None` if there is none.
    ///
    /// Address syntax is the engine's concern; malformed input is an error.
    fn get(&self, address: &str) -> Result<Option<RawRecord>>;

    /// Returns the metadata of the loaded database.
    fn descriptor(&self) -> &DatabaseDescriptor;
}

impl<E: LookupEngine + ?Sized> LookupEngine for Arc<E> {
    fn get(&self, address: &str) -> Result<Option<RawRecord>> {
        (**self).get(address)
    }

    fn descriptor(&self) -> &DatabaseDescriptor {
        (**self).descriptor()
    }
}

impl<E: LookupEngine + ?Sized> LookupEngine for Box<E> {
    fn get(&self, address: &str) -> Result<Option<RawRecord>> {
        (**self).get(address)
    }

    fn descriptor(&self) -> &DatabaseDescriptor {
        (**self).descriptor()
    }
}

/// Lookup engine backed by a `maxminddb::Reader`.
pub struct MaxMindEngine<S: AsRef<[u8]>> {
    reader: Reader<S>,
    descriptor: DatabaseDescriptor,
}

impl<S: AsRef<[u8]>> MaxMindEngine<S> {
    /// Wraps an opened reader.
    pub fn new(reader: Reader<S>) -> Self {
        let descriptor = extract_descriptor(&reader);
        Self { reader, descriptor }
    }

    /// Parses `source` as a MaxMind DB.
    pub fn from_source(source: S) -> std::result::Result<Self, MaxMindDbError> {
        Reader::from_source(source).map(Self::new)
    }
}

impl<S: AsRef<[u8]>> LookupEngine for MaxMindEngine<S> {
    fn get(&self, address: &str) -> Result<Option<RawRecord>> {
        let ip: IpAddr = address
            .parse()
            .map_err(|_| GeoIpError::InvalidAddress(address.to_string()))?;

        let result = self.reader.lookup(ip)?;
        if !result.has_data() {
            return Ok(None);
        }

        Ok(result.decode::<RawRecord>()?)
    }

    fn descriptor(&self) -> &DatabaseDescriptor {
        &self.descriptor
    }
}

impl<S: AsRef<[u8]>> std::fmt::Debug for MaxMindEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxMindEngine")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
