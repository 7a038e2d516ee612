//! Static response shapes and accepted database types per query kind.
//!
//! Field names are the database's own (snake_case) keys; recasing happens when
//! the response is assembled.

use super::types::QueryKind;

/// How a field is defaulted and descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Nested record. Absent values become an empty record filled with the
    /// declared sub-fields' defaults.
    Record(&'static [Field]),
    /// Sequence of records. Absent values become an empty sequence; each
    /// present element is normalized against the element fields.
    List(&'static [Field]),
    /// Boolean flag, `false` when absent.
    Flag,
    /// Plain value with no default; omitted when absent.
    Scalar,
}

/// One field of a response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Key as stored in the database.
    pub source: &'static str,
    /// Defaulting rule.
    pub kind: FieldKind,
}

/// Where the queried address is stamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSlot {
    /// `ipAddress` at the top level (flat shapes).
    TopLevel,
    /// `ipAddress` inside the named record field (compound shapes).
    Within(&'static str),
}

/// Expected fields of a response plus the location of the address stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseShape {
    /// Top-level fields, in output order.
    pub fields: &'static [Field],
    /// Where `ipAddress` goes.
    pub address_slot: AddressSlot,
}

impl ResponseShape {
    /// Returns `true` when the shape nests sub-records.
    pub fn is_compound(&self) -> bool {
        matches!(self.address_slot, AddressSlot::Within(_))
    }
}

const fn record(source: &'static str, fields: &'static [Field]) -> Field {
    Field {
        source,
        kind: FieldKind::Record(fields),
    }
}

const fn list(source: &'static str, fields: &'static [Field]) -> Field {
    Field {
        source,
        kind: FieldKind::List(fields),
    }
}

const fn flag(source: &'static str) -> Field {
    Field {
        source,
        kind: FieldKind::Flag,
    }
}

const fn scalar(source: &'static str) -> Field {
    Field {
        source,
        kind: FieldKind::Scalar,
    }
}

const TRAITS: &[Field] = &[
    flag("is_anonymous"),
    flag("is_anonymous_proxy"),
    flag("is_anonymous_vpn"),
    flag("is_hosting_provider"),
    flag("is_legitimate_proxy"),
    flag("is_public_proxy"),
    flag("is_satellite_provider"),
    flag("is_tor_exit_node"),
];

const CITY: &[Field] = &[
    record("city", &[]),
    record("continent", &[]),
    record("country", &[]),
    record("location", &[]),
    record("maxmind", &[]),
    record("postal", &[]),
    record("registered_country", &[]),
    record("represented_country", &[]),
    list("subdivisions", &[]),
    record("traits", TRAITS),
];

const COUNTRY: &[Field] = &[
    record("continent", &[]),
    record("country", &[]),
    record("maxmind", &[]),
    record("registered_country", &[]),
    record("represented_country", &[]),
    record("traits", TRAITS),
];

const ANONYMOUS_IP: &[Field] = &[
    flag("is_anonymous"),
    flag("is_anonymous_vpn"),
    flag("is_hosting_provider"),
    flag("is_public_proxy"),
    flag("is_tor_exit_node"),
];

const ASN: &[Field] = &[
    scalar("autonomous_system_number"),
    scalar("autonomous_system_organization"),
];

const CONNECTION_TYPE: &[Field] = &[scalar("connection_type")];

const ISP: &[Field] = &[
    scalar("autonomous_system_number"),
    scalar("autonomous_system_organization"),
    scalar("isp"),
    scalar("organization"),
    scalar("mobile_country_code"),
    scalar("mobile_network_code"),
];

const DOMAIN: &[Field] = &[scalar("domain")];

/// Returns the response shape for a query kind.
pub fn shape_for(kind: QueryKind) -> ResponseShape {
    let (fields, address_slot) = match kind {
        QueryKind::City | QueryKind::Enterprise => (CITY, AddressSlot::Within("traits")),
        QueryKind::Country => (COUNTRY, AddressSlot::Within("traits")),
        QueryKind::AnonymousIp => (ANONYMOUS_IP, AddressSlot::TopLevel),
        QueryKind::Asn => (ASN, AddressSlot::TopLevel),
        QueryKind::ConnectionType => (CONNECTION_TYPE, AddressSlot::TopLevel),
        QueryKind::Isp => (ISP, AddressSlot::TopLevel),
        QueryKind::Domain => (DOMAIN, AddressSlot::TopLevel),
    };
    ResponseShape {
        fields,
        address_slot,
    }
}

/// Returns the database type patterns a query kind accepts.
///
/// Patterns are matched as substrings of the database type so vendor variants
/// such as `GeoIP2-City-Special-Edition` stay usable.
pub fn accepted_types_for(kind: QueryKind) -> &'static [&'static str] {
    match kind {
        QueryKind::City => &["City"],
        QueryKind::Country => &["Country"],
        QueryKind::Enterprise => &["Enterprise"],
        QueryKind::AnonymousIp => &["GeoIP2-Anonymous-IP"],
        QueryKind::Asn => &["GeoLite2-ASN"],
        QueryKind::ConnectionType => &["GeoIP2-Connection-Type"],
        QueryKind::Isp => &["GeoIP2-ISP"],
        QueryKind::Domain => &["GeoIP2-Domain"],
    }
}
