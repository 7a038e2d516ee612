//! GeoIP data structures.
//!
//! This module defines the query kinds, database metadata, and the raw and
//! normalized result types passed between the reader components.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::IP_ADDRESS_KEY;

/// Raw, already-decoded record returned by the lookup engine for one address.
///
/// Keys are whatever the database stores (snake_case for MaxMind databases).
pub type RawRecord = Map<String, Value>;

/// The eight supported query shapes.
///
/// Each kind selects a response shape and the set of database types it may be
/// used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, ValueEnum)]
pub enum QueryKind {
    /// GeoIP2/GeoLite2 City
    City,
    /// GeoIP2/GeoLite2 Country
    Country,
    /// GeoIP2 Enterprise
    Enterprise,
    /// GeoIP2 Anonymous IP
    AnonymousIp,
    /// GeoLite2 ASN
    Asn,
    /// GeoIP2 Connection Type
    ConnectionType,
    /// GeoIP2 ISP
    Isp,
    /// GeoIP2 Domain
    Domain,
}

impl QueryKind {
    /// Name of the query method, as reported in error messages.
    pub fn method_name(&self) -> &'static str {
        match self {
            QueryKind::City => "city()",
            QueryKind::Country => "country()",
            QueryKind::Enterprise => "enterprise()",
            QueryKind::AnonymousIp => "anonymous_ip()",
            QueryKind::Asn => "asn()",
            QueryKind::ConnectionType => "connection_type()",
            QueryKind::Isp => "isp()",
            QueryKind::Domain => "domain()",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name().trim_end_matches("()"))
    }
}

/// Metadata of the currently loaded database.
///
/// Owned by the lookup engine; the reader layer only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseDescriptor {
    /// Database type identifier, e.g. `GeoIP2-City`
    pub database_type: String,
    /// IP version of the search tree (4 or 6)
    pub ip_version: u16,
    /// Binary format major version
    pub binary_format_major_version: u16,
    /// Binary format minor version
    pub binary_format_minor_version: u16,
    /// Build time as seconds since the Unix epoch
    pub build_epoch: u64,
    /// Descriptions keyed by language code
    pub description: BTreeMap<String, String>,
    /// Locales the database carries names for
    pub languages: Vec<String>,
    /// Number of nodes in the search tree
    pub node_count: u32,
    /// Record size in bits
    pub record_size: u16,
}

/// Field-complete, camelCased response returned to callers.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedResponse(Map<String, Value>);

impl NormalizedResponse {
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns the value of a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the queried address stamped onto the response.
    ///
    /// Flat responses carry it at the top level, compound responses (city,
    /// country, enterprise) under `traits`.
    pub fn ip_address(&self) -> Option<&str> {
        self.0
            .get(IP_ADDRESS_KEY)
            .or_else(|| self.0.get("traits").and_then(|t| t.get(IP_ADDRESS_KEY)))
            .and_then(Value::as_str)
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the response and returns the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Deserializes the response into a caller-defined typed model.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }
}

impl From<NormalizedResponse> for Value {
    fn from(response: NormalizedResponse) -> Self {
        Value::Object(response.0)
    }
}
