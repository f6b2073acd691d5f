//! Filter helpers for list queries
//!
//! A filter value that is missing, blank or exactly the `all` sentinel matches
//! every record. Districts are stored and compared in a canonical lowercase form.

/// Sentinel sent by clients to clear a filter
pub const ALL: &str = "all";

/// Return the value only if it should constrain the query
pub fn active(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value)
    }
}

/// Canonical district key: trimmed, lowercased, inner whitespace collapsed
pub fn normalize_district(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// District filter ready to compare against stored values
pub fn district(value: Option<&str>) -> Option<String> {
    active(value).map(normalize_district)
}
