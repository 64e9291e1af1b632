//! Prioritized key lookup over decoded JSON.
//!
//! The normalization rules are declarative: each side of a split has an ordered
//! list of candidate keys, and the first key *present* in a record wins. A key
//! that is present but holds `null` still wins; its value is simply `None`.

use serde_json::{Map, Value};

keys!(
    /// Keys that may hold the peak share in an object-shaped split.
    PEAK_KEYS = ["peak", "peakRate", "peak_percent", "peakPct", "peakValue"]
);
keys!(
    /// Keys that may hold the off-peak share in an object-shaped split.
    OFF_PEAK_KEYS = ["offPeak", "off_peak", "offPeakRate", "offpeak", "offPct", "off_percent", "offValue"]
);
keys!(
    /// Keys that may hold the value of a labeled array item.
    ITEM_VALUE_KEYS = ["value", "val", "amount", "data"]
);
keys!(PEAK_LABELS = ["peak"]);
keys!(OFF_PEAK_LABELS = ["offpeak", "off_peak"]);

/// Placeholder text for objects; never coerces to a number.
const OBJECT_TEXT: &str = "[object Object]";

/// Look up the first candidate key present in `record` and stringify its value.
///
/// Returns `None` when no candidate is present, or when the first present one
/// holds `null`.
pub(crate) fn first_present(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| record.get(*key)).and_then(scalar_text)
}

/// Find the first record in `items` whose `label` or `name` (lowercased)
/// equals one of `targets`.
pub(crate) fn find_labeled<'a>(items: &'a [Value], targets: &[&str]) -> Option<&'a Map<String, Value>> {
    items.iter().filter_map(Value::as_object).find(|item| {
        let label = lowered(item.get("label"));
        let name = lowered(item.get("name"));
        targets.iter().any(|t| *t == label || *t == name)
    })
}

/// Stringify a JSON value the way a loosely-typed payload expects.
///
/// `null` has no text. Numbers print in shortest round-trip form, arrays join
/// their items with `,` (nulls as empty), objects become a non-numeric marker.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(loose_text(other)),
    }
}

fn loose_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(loose_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => OBJECT_TEXT.to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // whole floats print without a trailing ".0"
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn lowered(value: Option<&Value>) -> String {
    value.map(loose_text).unwrap_or_default().to_lowercase()
}
