//! Individual row processing for the spring table
//!
//! Projects a raw positional row onto the fields the explorer uses and
//! applies the validity rules: coordinates and name must be present after
//! coercion, everything else is optional.

use super::field_parsers::{
    get_optional_field, parse_coordinate, parse_optional_number, parse_optional_string,
};
use crate::constants::columns;
use crate::models::SpringRecord;
use csv::StringRecord;

/// Parse one data row into a record.
///
/// Returns `None` when latitude, longitude or name is missing or
/// unparseable. Noisy temperature and pH cells never reject a row; they
/// simply come back absent.
pub fn parse_spring_record(record: &StringRecord) -> Option<SpringRecord> {
    let latitude = parse_coordinate(record.get(columns::LATITUDE))?;
    let longitude = parse_coordinate(record.get(columns::LONGITUDE))?;
    let name = get_optional_field(record, columns::NAME)?.to_string();

    Some(SpringRecord {
        latitude,
        longitude,
        name,
        temperature_f: parse_optional_number(record, columns::TEMPERATURE_F),
        ph: parse_optional_number(record, columns::PH),
        nearby_location: parse_optional_string(record, columns::NEARBY_LOCATION),
        usgs_quad: parse_optional_string(record, columns::USGS_QUAD),
    })
}

/// Describe why a row was rejected, for debug logging
pub fn rejection_reason(record: &StringRecord) -> &'static str {
    if parse_coordinate(record.get(columns::LATITUDE)).is_none() {
        "missing or invalid latitude"
    } else if parse_coordinate(record.get(columns::LONGITUDE)).is_none() {
        "missing or invalid longitude"
    } else if get_optional_field(record, columns::NAME).is_none() {
        "missing name"
    } else {
        "valid"
    }
}
