//! Query facade.
//!
//! [`GeoIpReader`] binds a lookup engine and exposes one query method per
//! query kind. All methods run the same pipeline: type check, lookup,
//! normalization.

use super::engine::{LookupEngine, MaxMindEngine};
use super::guard::check_compatible;
use super::lookup::lookup;
use super::normalize::normalize;
use super::schema::shape_for;
use super::types::{DatabaseDescriptor, NormalizedResponse, QueryKind};
use crate::error_handling::Result;

/// Query-capable handle over an opened database.
///
/// The handle holds no mutable state; share it across threads behind an
/// `Arc` when the engine is `Send + Sync` (as `MaxMindEngine` is).
///
/// # Examples
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let reader = geoip_reader::open("GeoLite2-City.mmdb").await?;
/// let response = reader.city("81.2.69.160")?;
/// println!("{}", serde_json::to_string_pretty(&response)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GeoIpReader<E = MaxMindEngine<Vec<u8>>> {
    engine: E,
}

impl<E: LookupEngine> GeoIpReader<E> {
    /// Builds a reader over any lookup engine.
    pub fn from_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Metadata of the loaded database.
    pub fn metadata(&self) -> &DatabaseDescriptor {
        self.engine.descriptor()
    }

    /// Borrows the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Runs a query of the given kind.
    ///
    /// # Errors
    ///
    /// - `IncompatibleDatabase` if the database type does not fit `kind`
    ///   (checked before any lookup)
    /// - `AddressNotFound` if the database has no entry for `address`
    /// - any engine error, e.g. `InvalidAddress`
    pub fn query(&self, kind: QueryKind, address: &str) -> Result<NormalizedResponse> {
        // The descriptor is read on every call; engines may swap databases
        check_compatible(self.engine.descriptor(), kind)?;
        let raw = lookup(&self.engine, address)?;
        Ok(normalize(&raw, &shape_for(kind), address))
    }

    /// GeoIP2/GeoLite2 City lookup.
    pub fn city(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::City, address)
    }

    /// GeoIP2/GeoLite2 Country lookup.
    pub fn country(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::Country, address)
    }

    /// GeoIP2 Enterprise lookup.
    pub fn enterprise(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::Enterprise, address)
    }

    /// GeoIP2 Anonymous IP lookup.
    pub fn anonymous_ip(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::AnonymousIp, address)
    }

    /// GeoLite2 ASN lookup.
    pub fn asn(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::Asn, address)
    }

    /// GeoIP2 Connection Type lookup.
    pub fn connection_type(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::ConnectionType, address)
    }

    /// GeoIP2 ISP lookup.
    pub fn isp(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::Isp, address)
    }

    /// GeoIP2 Domain lookup.
    pub fn domain(&self, address: &str) -> Result<NormalizedResponse> {
        self.query(QueryKind::Domain, address)
    }
}
