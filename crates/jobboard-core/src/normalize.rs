use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pick::pick_first;

// Candidate keys per display field. The order decides which field wins when a
// payload carries several variants, so keep it stable.
pub const TITLE_KEYS: &[&str] = &[
    "title",
    "jobTitle",
    "recruitTitle",
    "recruitNm",
    "subject",
    "sj",
    "noticeTitle",
    "jobNm",
];
pub const AGENCY_KEYS: &[&str] = &[
    "agency",
    "org",
    "organization",
    "company",
    "institution",
    "corp",
    "bizNm",
    "orgNm",
];
pub const DEADLINE_KEYS: &[&str] = &[
    "deadline",
    "closeDate",
    "endDate",
    "applyEnd",
    "applyEndDate",
    "receiptEnd",
    "receiptEndDate",
    "periodEnd",
    "dueDate",
];
pub const LOCATION_KEYS: &[&str] = &[
    "location",
    "region",
    "area",
    "place",
    "address",
    "addr",
    "workPlace",
];
pub const CATEGORY_KEYS: &[&str] = &[
    "category",
    "categoryNm",
    "field",
    "jobType",
    "recruitType",
    "workType",
];
pub const SUMMARY_KEYS: &[&str] = &["summary", "content", "description", "desc", "jobDesc"];
pub const LINK_KEYS: &[&str] = &["url", "link", "detailUrl", "homepage", "applyUrl"];

pub const DEFAULT_TITLE: &str = "제목 정보 없음";
pub const DEFAULT_AGENCY: &str = "기관 정보 없음";
pub const DEFAULT_DEADLINE: &str = "마감 정보 없음";
pub const DEFAULT_LOCATION: &str = "지역 정보 없음";
pub const DEFAULT_CATEGORY: &str = "분류 정보 없음";

/// Fixed display form of one raw result record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub title: String,
    pub summary: String,
    /// `[agency, location, category, deadline]` without empty entries.
    #[serde(default)]
    pub tags: Vec<String>,
    pub agency: String,
    pub location: String,
    pub category: String,
    pub deadline: String,
    /// Empty when the record carries no link.
    #[serde(default)]
    pub link: String,
}

fn pick_or(raw: &Value, keys: &[&str], default: &str) -> String {
    let picked = pick_first(Some(raw), keys);
    if picked.is_empty() {
        default.to_string()
    } else {
        picked
    }
}

/// Map a raw record onto the display schema, substituting readable defaults
/// for anything the record does not carry.
pub fn normalize_item(raw: &Value) -> NormalizedItem {
    let title = pick_or(raw, TITLE_KEYS, DEFAULT_TITLE);
    let agency = pick_or(raw, AGENCY_KEYS, DEFAULT_AGENCY);
    let deadline = pick_or(raw, DEADLINE_KEYS, DEFAULT_DEADLINE);
    let location = pick_or(raw, LOCATION_KEYS, DEFAULT_LOCATION);
    let category = pick_or(raw, CATEGORY_KEYS, DEFAULT_CATEGORY);
    let summary = pick_or(raw, SUMMARY_KEYS, &format!("{agency} · {location}"));
    let link = pick_first(Some(raw), LINK_KEYS);

    let tags = [&agency, &location, &category, &deadline]
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect();

    NormalizedItem {
        title,
        summary,
        tags,
        agency,
        location,
        category,
        deadline,
        link,
    }
}
