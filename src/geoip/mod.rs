//! GeoIP lookups with normalized responses.
//!
//! This module sits in front of a MaxMind DB reader. For each query it checks
//! that the opened database fits the query method, looks the address up, and
//! reshapes the raw record into a stable, camelCased response.
//!
//! Pipeline per query: type check, lookup, normalization.

mod engine;
mod extract;
mod guard;
mod init;
mod lookup;
mod metadata;
mod normalize;
mod reader;
mod schema;
mod types;

// Re-export public API
pub use engine::{LookupEngine, MaxMindEngine};
pub use guard::{check_compatible, type_matches};
pub use init::{open, open_archive, open_buffer, open_with};
pub use lookup::lookup;
pub use normalize::{normalize, recase_key, recase_value};
pub use reader::GeoIpReader;
pub use schema::{accepted_types_for, shape_for, AddressSlot, Field, FieldKind, ResponseShape};
pub use types::{DatabaseDescriptor, NormalizedResponse, QueryKind, RawRecord};
