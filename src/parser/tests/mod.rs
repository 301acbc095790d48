//! Test utilities for spring table parsing
//!
//! Helpers for building positional rows and temporary table files shared by
//! the parser test modules.

use csv::StringRecord;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::constants::columns;

mod field_parser_tests;

/// The reference row: every unused column holds a placeholder
pub fn example_row() -> Vec<&'static str> {
    vec![
        "CA",
        "_",
        "36.5",
        "_",
        "-121.9",
        "_",
        "Example Spring",
        "_",
        "_",
        "104 F",
        "_",
        "_",
        "_",
        "_",
        "_",
        "_",
        "_",
        "_",
        "8.1 pH",
        "_",
        "_",
        "Nearby Town",
        "_",
        "_",
        "USGS123",
        "_",
    ]
}

/// Build a full-width row with only the named cells populated
pub fn row_with(cells: &[(usize, &str)]) -> StringRecord {
    let mut fields = vec![String::new(); columns::COUNT];
    for (index, value) in cells {
        fields[*index] = (*value).to_string();
    }
    StringRecord::from(fields)
}

/// Render rows as CSV lines, quoting cells that contain commas
pub fn to_csv_line(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| {
            if cell.contains(',') || cell.contains('"') {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                (*cell).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Two metadata rows as they appear at the top of the bundled table
pub fn header_lines() -> String {
    "Thermal springs of the United States,,,,\nState,,Lat,,Lon,,Name,,,Temp F\n".to_string()
}

/// Complete table with header rows, the reference row and a dropped row
pub fn create_test_table() -> String {
    let mut content = header_lines();
    content.push_str(&to_csv_line(&example_row()));
    content.push('\n');

    // Missing latitude: dropped
    let mut no_lat = example_row();
    no_lat[columns::LATITUDE] = "";
    no_lat[columns::NAME] = "Lost Spring";
    content.push_str(&to_csv_line(&no_lat));
    content.push('\n');

    // Noisy optional fields: kept with absent values
    let mut noisy = example_row();
    noisy[columns::NAME] = "Quiet Pool";
    noisy[columns::LATITUDE] = "44.25";
    noisy[columns::LONGITUDE] = "-110.5";
    noisy[columns::TEMPERATURE_F] = "N/A";
    noisy[columns::PH] = "";
    noisy[columns::NEARBY_LOCATION] = "";
    content.push_str(&to_csv_line(&noisy));
    content.push('\n');

    content
}

/// Write content to a temporary file
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
