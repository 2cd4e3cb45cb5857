// ── Display formatting for cascaded parameters ──
//
// Parameter names arrive in camel case and values as arbitrary JSON
// shapes; both are turned into the strings the table renders.

use indexmap::IndexMap;

use crate::model::ParameterValue;

/// Convert a parameter name from camel case to a long display name.
///
/// Words begin with an upper-case letter and are separated with spaces:
/// `cacheThreshold` becomes `Cache Threshold`. Underscores are stripped.
/// Names starting with `ddns`, `pd` or `ip` keep the whole token upper
/// case: `ddnsGeneratedPrefix` becomes `DDNS Generated Prefix`.
pub fn uncamel_case(key: &str) -> String {
    let stripped: String = key.trim().chars().filter(|c| *c != '_').collect();
    if stripped.is_empty() {
        return key.to_owned();
    }

    // Insert a space before every run of upper-case letters, except at
    // the very start of the name.
    let mut text = String::with_capacity(stripped.len() + 8);
    let mut prev_upper = true;
    for c in stripped.chars() {
        if c.is_ascii_uppercase() && !prev_upper {
            text.push(' ');
        }
        prev_upper = c.is_ascii_uppercase();
        text.push(c);
    }

    for (prefix, replacement) in [("ddns", "DDNS"), ("pd", "PD"), ("ip", "IP")] {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = format!("{replacement}{rest}");
            break;
        }
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

/// Format a parameter value for a table cell.
pub fn format_value(value: &ParameterValue) -> String {
    match value {
        ParameterValue::Bool(b) => b.to_string(),
        ParameterValue::Number(n) => n.to_string(),
        ParameterValue::Text(s) => s.clone(),
        ParameterValue::Sequence(items) => {
            let elements: Vec<String> = items.iter().map(element_repr).collect();
            format!("[ {} ]", elements.join(", "))
        }
        ParameterValue::Mapping(map) => {
            let mut out = String::new();
            write_mapping(map, 0, &mut out);
            out
        }
    }
}

/// Default representation of an element inside a bracketed sequence.
/// Not recursive into the table formatting: nested sequences collapse to
/// comma-joined elements, nested mappings to a one-line dump.
fn element_repr(value: &ParameterValue) -> String {
    match value {
        ParameterValue::Bool(b) => b.to_string(),
        ParameterValue::Number(n) => n.to_string(),
        ParameterValue::Text(s) => s.clone(),
        ParameterValue::Sequence(items) => {
            let elements: Vec<String> = items.iter().map(element_repr).collect();
            elements.join(",")
        }
        ParameterValue::Mapping(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(key, value)| {
                    let value = value.as_ref().map_or_else(|| "null".to_owned(), element_repr);
                    format!("{}: {value}", uncamel_case(key))
                })
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
    }
}

// Mapping values render as a space-indented key-value dump, one space per
// nesting level, quotes omitted. Keys are re-keyed to display names at
// every mapping depth; sequences stay structurally intact.

fn write_mapping(map: &IndexMap<String, Option<ParameterValue>>, depth: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        push_indent(depth + 1, out);
        out.push_str(&uncamel_case(key));
        out.push_str(": ");
        match value {
            Some(value) => write_dump_value(value, depth + 1, out),
            None => out.push_str("null"),
        }
    }
    out.push('\n');
    push_indent(depth, out);
    out.push('}');
}

fn write_dump_value(value: &ParameterValue, depth: usize, out: &mut String) {
    match value {
        ParameterValue::Bool(b) => out.push_str(&b.to_string()),
        ParameterValue::Number(n) => out.push_str(&n.to_string()),
        ParameterValue::Text(s) => out.push_str(s),
        ParameterValue::Sequence(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(depth + 1, out);
                write_dump_value(item, depth + 1, out);
            }
            out.push('\n');
            push_indent(depth, out);
            out.push(']');
        }
        ParameterValue::Mapping(map) => write_mapping(map, depth, out),
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push(' ');
    }
}
