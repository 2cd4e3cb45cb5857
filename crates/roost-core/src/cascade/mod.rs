// ── Cascaded parameter resolution ──
//
// Turns per-level parameter bags for multiple data sets (e.g. the
// servers sharing a subnet) into display rows. The effective value of a
// parameter is the value at the most specific level where it is
// specified: a subnet-level value overrides the shared-network value,
// which overrides the global value.

mod display;

use indexmap::IndexSet;

pub use display::{format_value, uncamel_case};

use crate::model::NamedParameterSet;

/// Resolution of one parameter for one data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    /// Formatted effective value, `None` when unspecified at every level.
    pub effective: Option<String>,
    /// Name of the level the effective value came from.
    pub effective_level: Option<String>,
    /// Formatted value at each level; always `levels.len()` entries.
    pub per_level_values: Vec<Option<String>>,
}

/// A table row for a single parameter across all data sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRow {
    pub display_name: String,
    /// One resolution per data set, in data-set order.
    pub per_data_set: Vec<ResolvedParameter>,
}

/// Resolve cascaded parameters into display rows.
///
/// `levels` names the inheritance levels, most-specific first, and must
/// line up with each data set's bags. Parameters named in `excluded` are
/// skipped. Rows are keyed by display name and sorted ascending; a
/// missing bag or an explicit `null` degrades to an unspecified cell,
/// never to an error.
pub fn resolve(
    data_sets: &[NamedParameterSet],
    levels: &[&str],
    excluded: &[&str],
) -> Vec<ParameterRow> {
    // Gather the union of parameter names in first-seen order. Each data
    // set can contain a different set of parameters; typically they are
    // similar.
    let mut keys: IndexSet<&str> = IndexSet::new();
    for set in data_sets {
        for bag in set.levels.iter().flatten() {
            for key in bag.keys() {
                if !excluded.contains(&key.as_str()) {
                    keys.insert(key.as_str());
                }
            }
        }
    }
    if keys.is_empty() {
        return Vec::new();
    }

    let mut rows: Vec<ParameterRow> = Vec::new();
    for set in data_sets {
        for key in &keys {
            let resolved = resolve_one(set, key, levels);
            let display_name = uncamel_case(key);
            match rows.iter_mut().find(|row| row.display_name == display_name) {
                Some(row) => row.per_data_set.push(resolved),
                None => rows.push(ParameterRow {
                    display_name,
                    per_data_set: vec![resolved],
                }),
            }
        }
    }

    rows.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    rows
}

/// Scan one data set's levels, most-specific first, for a single
/// parameter. The first specified value becomes effective.
fn resolve_one(set: &NamedParameterSet, key: &str, levels: &[&str]) -> ResolvedParameter {
    let mut effective = None;
    let mut effective_level = None;
    let mut per_level_values = Vec::with_capacity(levels.len());

    for (i, level) in levels.iter().enumerate() {
        let value = set
            .levels
            .get(i)
            .and_then(Option::as_ref)
            .and_then(|bag| bag.get(key))
            .and_then(Option::as_ref);
        match value {
            Some(value) => {
                let formatted = format_value(value);
                if effective.is_none() {
                    effective = Some(formatted.clone());
                    effective_level = Some((*level).to_owned());
                }
                per_level_values.push(Some(formatted));
            }
            None => per_level_values.push(None),
        }
    }

    ResolvedParameter {
        effective,
        effective_level,
        per_level_values,
    }
}
