//! Response normalization.
//!
//! Reshapes a raw record into the field-complete, camelCased response for a
//! query kind:
//! - every shape field is present, at its default when the record lacks it
//! - keys at every depth are camelCased, except keys containing a hyphen
//!   (locale codes such as `pt-BR`), which are kept verbatim
//! - nested records and list elements are normalized against their own
//!   declared fields
//! - the queried address is stamped as `ipAddress`
//!
//! The raw record is never mutated.

use convert_case::{Case, Casing};
use serde_json::{Map, Value};

use super::schema::{AddressSlot, Field, FieldKind, ResponseShape};
use super::types::{NormalizedResponse, RawRecord};
use crate::config::IP_ADDRESS_KEY;

/// Recases a single key to camelCase. Keys containing `-` are returned as is.
pub fn recase_key(key: &str) -> String {
    if key.contains('-') {
        key.to_string()
    } else {
        key.to_case(Case::Camel)
    }
}

/// Recursively recases every key of a value.
pub fn recase_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(recase_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(recase_value).collect()),
        other => other.clone(),
    }
}

fn recase_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (recase_key(key), recase_value(value)))
        .collect()
}

/// Builds the response for `shape` from `raw`, stamping `address`.
pub fn normalize(raw: &RawRecord, shape: &ResponseShape, address: &str) -> NormalizedResponse {
    let mut out = normalize_fields(raw, shape.fields, false);

    let stamp = Value::String(address.to_string());
    match shape.address_slot {
        AddressSlot::TopLevel => {
            out.insert(IP_ADDRESS_KEY.to_string(), stamp);
        }
        AddressSlot::Within(source) => {
            let name = recase_key(source);
            // The slot must be a record; anything else is replaced by its defaults
            if !out.get(&name).is_some_and(Value::is_object) {
                let defaults = shape
                    .fields
                    .iter()
                    .find(|field| field.source == source)
                    .and_then(|field| normalize_field(field.kind, None))
                    .filter(Value::is_object)
                    .unwrap_or_else(|| Value::Object(Map::new()));
                out.insert(name.clone(), defaults);
            }
            if let Some(Value::Object(record)) = out.get_mut(&name) {
                record.insert(IP_ADDRESS_KEY.to_string(), stamp);
            }
        }
    }

    NormalizedResponse::from_map(out)
}

/// Normalizes one record level.
///
/// With `keep_extra`, raw keys outside `fields` are carried over (recased);
/// the top level of a response keeps only the shape's fields.
fn normalize_fields(raw: &RawRecord, fields: &[Field], keep_extra: bool) -> Map<String, Value> {
    let mut out = if keep_extra {
        recase_map(raw)
    } else {
        Map::new()
    };

    for field in fields {
        let name = recase_key(field.source);
        // Look the field up by its stored key first, then by its recased name
        let value = raw
            .get(field.source)
            .or_else(|| raw.get(&name))
            .filter(|v| !v.is_null());

        match normalize_field(field.kind, value) {
            Some(normalized) => {
                out.insert(name, normalized);
            }
            None => {
                out.remove(&name);
            }
        }
    }

    out
}

fn normalize_field(kind: FieldKind, value: Option<&Value>) -> Option<Value> {
    match (kind, value) {
        (FieldKind::Record(fields), Some(Value::Object(record))) => {
            Some(Value::Object(normalize_fields(record, fields, true)))
        }
        (FieldKind::Record(fields), None) => Some(Value::Object(normalize_fields(
            &Map::new(),
            fields,
            true,
        ))),
        (FieldKind::List(fields), Some(Value::Array(items))) => Some(Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(record) => Value::Object(normalize_fields(record, fields, true)),
                    other => recase_value(other),
                })
                .collect(),
        )),
        (FieldKind::List(_), None) => Some(Value::Array(Vec::new())),
        (FieldKind::Flag, None) => Some(Value::Bool(false)),
        (FieldKind::Scalar, None) => None,
        // Present but not of the declared category: keep the data, recased
        (_, Some(other)) => Some(recase_value(other)),
    }
}
