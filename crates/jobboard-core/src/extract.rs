//! Locating the result list and the total count inside response bodies of
//! unknown shape.
//!
//! Public data APIs disagree on where they put their results. Each known
//! location is a key path, and the paths are probed in a fixed priority
//! order. Deeply nested government style envelopes come first, flatter
//! shapes after them.

use serde_json::Value;

use crate::pick::is_truthy;

/// Candidate locations of the item list, highest priority first.
pub const ITEM_PATHS: &[&[&str]] = &[
    &["response", "body", "items", "item"],
    &["response", "body", "items"],
    &["response", "body", "item"],
    &["items", "item"],
    &["items"],
    &["data", "item"],
    &["data"],
    &["list"],
    &["result", "items"],
    &["result"],
];

/// Candidate locations of the total result count, highest priority first.
pub const TOTAL_COUNT_PATHS: &[&[&str]] = &[
    &["response", "body", "totalCount"],
    &["totalCount"],
    &["result", "totalCount"],
    &["total"],
];

/// Walk `path` through nested objects. Any non-object along the way ends the walk.
pub fn probe<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Extract the result items from a parsed response body.
///
/// The first present candidate wins. A single record is wrapped into a
/// one-element list; no match yields an empty list.
pub fn extract_items(response: &Value) -> Vec<Value> {
    if !is_truthy(response) {
        return Vec::new();
    }

    let found = ITEM_PATHS
        .iter()
        .filter_map(|path| probe(response, path))
        .find(|value| is_truthy(value));

    match found {
        Some(Value::Array(items)) => items.clone(),
        Some(single) => vec![single.clone()],
        None => Vec::new(),
    }
}

/// Extract the total result count, falling back to `fallback` (usually the
/// number of items on the current page).
pub fn extract_total_count(response: &Value, fallback: u64) -> u64 {
    TOTAL_COUNT_PATHS
        .iter()
        .filter_map(|path| probe(response, path))
        .find_map(as_count)
        .unwrap_or(fallback)
}

/// Interpret a value as a positive count. Numeric strings are accepted since
/// loosely typed APIs send `"totalCount": "42"`.
fn as_count(value: &Value) -> Option<u64> {
    let count = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    (count > 0).then_some(count)
}
