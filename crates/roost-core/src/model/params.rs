// ── Cascaded configuration parameter model ──
//
// Configuration parameters arrive as JSON-shaped objects, one bag per
// inheritance level per server. The runtime type tests of a dynamic
// language become one tagged variant here; everything downstream is a
// match over `ParameterValue`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single configuration value at one inheritance level.
///
/// Mapping values may carry explicitly unspecified entries (JSON `null`),
/// hence `Option` in the map payload, the same shape as a whole bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Sequence(Vec<ParameterValue>),
    Mapping(IndexMap<String, Option<ParameterValue>>),
}

/// One inheritance level worth of parameters, keyed by parameter name.
///
/// Insertion order is preserved; a `None` value means the key is present
/// but explicitly unspecified and must never become effective.
pub type ParameterBag = IndexMap<String, Option<ParameterValue>>;

/// All parameters for a single data set (e.g. one server), one bag per
/// inheritance level, most-specific first.
///
/// `levels[i]` corresponds to the i-th entry of the separately supplied
/// level-name list. A whole bag may be absent at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParameterSet {
    /// Data set name (e.g. server name displayed in a column header).
    pub name: String,
    /// Per-level parameter bags, most-specific level first.
    pub levels: Vec<Option<ParameterBag>>,
}

impl NamedParameterSet {
    pub fn new(name: impl Into<String>, levels: Vec<Option<ParameterBag>>) -> Self {
        Self {
            name: name.into(),
            levels,
        }
    }
}

// ── Construction conveniences ───────────────────────────────────────

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ParameterValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
