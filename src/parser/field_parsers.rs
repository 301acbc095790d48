//! Field parsing utilities for spring table rows
//!
//! Every helper here is tolerant: a value that cannot be interpreted comes
//! back as `None` instead of an error, and the caller decides whether the
//! row survives.

use crate::constants::{NA_MARKERS, NUMERIC_PATTERN};
use csv::StringRecord;
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_PATTERN).expect("Invalid numeric regex"));

/// Extract the first number embedded in a noisy text value.
///
/// Units, qualifiers and stray symbols around the number are ignored, so
/// `"102.5 F"` yields `102.5` and `"~95"` yields `95`. Missing input or
/// text without digits yields `None`.
pub fn extract_number(text: Option<&str>) -> Option<f64> {
    let text = text?;
    let found = NUMERIC_REGEX.find(text)?;
    found
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Coerce a coordinate cell to a finite number.
///
/// Unlike [`extract_number`] the whole trimmed cell must be numeric;
/// `"36.5N"` is rejected rather than partially read.
pub fn parse_coordinate(text: Option<&str>) -> Option<f64> {
    text.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Whether a trimmed cell is one of the missing-value markers
pub fn is_na_marker(text: &str) -> bool {
    NA_MARKERS.contains(&text)
}

/// Get a trimmed cell from a row; empty cells and NA markers are absent
pub fn get_optional_field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|s| !s.is_empty() && !is_na_marker(s))
}

/// Get a trimmed, non-empty cell as an owned string
pub fn parse_optional_string(record: &StringRecord, index: usize) -> Option<String> {
    get_optional_field(record, index).map(ToString::to_string)
}

/// Extract the first number from a cell that is not an NA marker
pub fn parse_optional_number(record: &StringRecord, index: usize) -> Option<f64> {
    extract_number(get_optional_field(record, index))
}
