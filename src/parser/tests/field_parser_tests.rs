//! Tests for numeric extraction and cell helpers

use super::*;
use crate::parser::field_parsers::{
    extract_number, get_optional_field, is_na_marker, parse_coordinate, parse_optional_number,
};

#[test]
fn test_extract_number_ignores_units() {
    assert_eq!(extract_number(Some("102.5 F")), Some(102.5));
    assert_eq!(extract_number(Some("104 F")), Some(104.0));
    assert_eq!(extract_number(Some("8.1 pH")), Some(8.1));
    assert_eq!(extract_number(Some("~95")), Some(95.0));
    assert_eq!(extract_number(Some("approx. 120-130")), Some(120.0));
}

#[test]
fn test_extract_number_without_digits_is_absent() {
    assert_eq!(extract_number(Some("N/A")), None);
    assert_eq!(extract_number(Some("")), None);
    assert_eq!(extract_number(Some("warm")), None);
    assert_eq!(extract_number(Some("-")), None);
    assert_eq!(extract_number(None), None);
}

#[test]
fn test_extract_number_signs_and_fractions() {
    assert_eq!(extract_number(Some("-3.5")), Some(-3.5));
    assert_eq!(extract_number(Some("+7")), Some(7.0));
    assert_eq!(extract_number(Some(".5 units")), Some(0.5));
    assert_eq!(extract_number(Some("pH 6")), Some(6.0));
}

#[test]
fn test_extract_number_takes_first_match() {
    assert_eq!(extract_number(Some("98 F (37 C)")), Some(98.0));
    assert_eq!(extract_number(Some("1.2.3")), Some(1.2));
}

#[test]
fn test_parse_coordinate_requires_whole_cell() {
    assert_eq!(parse_coordinate(Some("36.5")), Some(36.5));
    assert_eq!(parse_coordinate(Some(" -121.9 ")), Some(-121.9));
    assert_eq!(parse_coordinate(Some("36.5N")), None);
    assert_eq!(parse_coordinate(Some("")), None);
    assert_eq!(parse_coordinate(None), None);
}

#[test]
fn test_parse_coordinate_rejects_non_finite() {
    assert_eq!(parse_coordinate(Some("NaN")), None);
    assert_eq!(parse_coordinate(Some("inf")), None);
    assert_eq!(parse_coordinate(Some("-infinity")), None);
}

#[test]
fn test_optional_field_trims_and_filters_empty() {
    let row = row_with(&[(0, "  CA  "), (1, "   ")]);
    assert_eq!(get_optional_field(&row, 0), Some("CA"));
    assert_eq!(get_optional_field(&row, 1), None);
    assert_eq!(get_optional_field(&row, 200), None);
}

#[test]
fn test_optional_number_from_row() {
    let row = row_with(&[(columns::TEMPERATURE_F, "150 F"), (columns::PH, "N/A")]);
    assert_eq!(parse_optional_number(&row, columns::TEMPERATURE_F), Some(150.0));
    assert_eq!(parse_optional_number(&row, columns::PH), None);
}

#[test]
fn test_na_markers_are_absent() {
    assert!(is_na_marker("N/A"));
    assert!(is_na_marker("<NA>"));
    assert!(!is_na_marker("Na"));
    assert!(!is_na_marker(""));

    let row = row_with(&[(0, " n/a "), (1, "NULL"), (columns::PH, "-1.#IND")]);
    assert_eq!(get_optional_field(&row, 0), None);
    assert_eq!(get_optional_field(&row, 1), None);
    // The marker text would otherwise yield -1
    assert_eq!(parse_optional_number(&row, columns::PH), None);
}
