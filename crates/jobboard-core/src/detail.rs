use serde::Serialize;
use serde_json::Value;

use crate::normalize::NormalizedItem;
use crate::pick::display_value;

/// Maximum number of raw fields shown after the preferred entries.
pub const MAX_DYNAMIC_ENTRIES: usize = 8;

pub const LABEL_AGENCY: &str = "기관";
pub const LABEL_LOCATION: &str = "지역";
pub const LABEL_CATEGORY: &str = "분류";
pub const LABEL_DEADLINE: &str = "마감";

/// One label/value row of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
}

impl DetailEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

fn is_displayable_scalar(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Build the ordered detail rows for a record.
///
/// The four semantic fields come first, followed by up to
/// [`MAX_DYNAMIC_ENTRIES`] scalar fields of the raw record in their original
/// order. Rows with an empty value are dropped.
pub fn build_detail_list(raw: &Value, normalized: &NormalizedItem) -> Vec<DetailEntry> {
    let preferred = [
        (LABEL_AGENCY, &normalized.agency),
        (LABEL_LOCATION, &normalized.location),
        (LABEL_CATEGORY, &normalized.category),
        (LABEL_DEADLINE, &normalized.deadline),
    ]
    .into_iter()
    .map(|(label, value)| DetailEntry::new(label, value.as_str()));

    let dynamic = raw
        .as_object()
        .into_iter()
        .flat_map(|fields| fields.iter())
        .filter(|(_, value)| is_displayable_scalar(value))
        .take(MAX_DYNAMIC_ENTRIES)
        .map(|(key, value)| DetailEntry::new(key.as_str(), display_value(value)));

    preferred
        .chain(dynamic)
        .filter(|entry| !entry.value.is_empty())
        .collect()
}
