// ── JSON-to-domain conversions ──
//
// Bridges raw `serde_json::Value` trees (as handed over by the REST
// client) into the parameter model. Conversion is infallible: JSON
// `null` becomes an unspecified entry at mapping level and is dropped
// inside sequences.

use indexmap::IndexMap;
use serde_json::Value;

use crate::model::{NamedParameterSet, ParameterBag, ParameterValue};

impl ParameterValue {
    /// Convert a JSON value; `None` for JSON `null`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            // Nulls inside a sequence carry no displayable information.
            Value::Array(items) => Some(Self::Sequence(
                items.into_iter().filter_map(Self::from_json).collect(),
            )),
            Value::Object(map) => Some(Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from_json(value)))
                    .collect::<IndexMap<_, _>>(),
            )),
        }
    }
}

/// Convert a JSON object into a parameter bag, preserving key order.
///
/// Non-object values yield an empty bag; a malformed level degrades to
/// "nothing specified here" rather than failing.
pub fn bag_from_json(value: Value) -> ParameterBag {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, ParameterValue::from_json(value)))
            .collect(),
        _ => ParameterBag::new(),
    }
}

/// Build a named parameter set from per-level JSON objects, most-specific
/// level first. A JSON `null` level becomes an absent bag.
pub fn set_from_json(name: impl Into<String>, levels: Vec<Value>) -> NamedParameterSet {
    NamedParameterSet::new(
        name,
        levels
            .into_iter()
            .map(|level| match level {
                Value::Null => None,
                other => Some(bag_from_json(other)),
            })
            .collect(),
    )
}
