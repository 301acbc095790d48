//! Core data structures for hot-spring processing.
//!
//! Defines the validated spring record, the in-memory record set built for
//! each request, numeric intervals and load statistics.

use serde::{Deserialize, Serialize};

/// One validated row of the spring table.
///
/// Latitude, longitude and name are always present; rows missing any of
/// them never become a `SpringRecord`. Celsius is derived on demand from
/// the Fahrenheit value and is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub temperature_f: Option<f64>,
    pub ph: Option<f64>,
    pub nearby_location: Option<String>,
    pub usgs_quad: Option<String>,
}

impl SpringRecord {
    /// Create a record with only the required fields set
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            temperature_f: None,
            ph: None,
            nearby_location: None,
            usgs_quad: None,
        }
    }

    pub fn with_temperature_f(mut self, temperature_f: f64) -> Self {
        self.temperature_f = Some(temperature_f);
        self
    }

    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = Some(ph);
        self
    }

    pub fn with_nearby_location(mut self, location: impl Into<String>) -> Self {
        self.nearby_location = Some(location.into());
        self
    }

    pub fn with_usgs_quad(mut self, quad: impl Into<String>) -> Self {
        self.usgs_quad = Some(quad.into());
        self
    }

    /// Temperature in Celsius, present iff the Fahrenheit value is present
    pub fn temperature_c(&self) -> Option<f64> {
        self.temperature_f.map(fahrenheit_to_celsius)
    }

    /// Whether both coordinates are finite numbers
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Convert a Fahrenheit temperature to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Inclusive numeric interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval accepting every number
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Inclusive containment check
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// True when the interval covers a single value
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// True when no value can satisfy the interval
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Smallest interval covering every value, `None` for an empty input
    pub fn spanning(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, value| match acc {
            None => Some(Self::new(value, value)),
            Some(interval) => Some(Self::new(interval.min.min(value), interval.max.max(value))),
        })
    }
}

/// Observed min/max of the optional numeric fields across a record set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservedRanges {
    /// `None` when no record has a temperature
    pub temperature_f: Option<Interval>,
    /// `None` when no record has a pH value
    pub ph: Option<Interval>,
}

/// The validated records for one request, in source row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<SpringRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<SpringRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SpringRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpringRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max of present temperature and pH values
    pub fn observed_ranges(&self) -> ObservedRanges {
        ObservedRanges {
            temperature_f: Interval::spanning(self.iter().filter_map(|r| r.temperature_f)),
            ph: Interval::spanning(self.iter().filter_map(|r| r.ph)),
        }
    }

    /// Mean position of all records, or `fallback` for an empty set
    pub fn center_or(&self, fallback: (f64, f64)) -> (f64, f64) {
        if self.records.is_empty() {
            return fallback;
        }

        let count = self.records.len() as f64;
        let (lat_sum, lon_sum) = self
            .iter()
            .fold((0.0, 0.0), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));
        (lat_sum / count, lon_sum / count)
    }
}

impl From<Vec<SpringRecord>> for RecordSet {
    fn from(records: Vec<SpringRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a SpringRecord;
    type IntoIter = std::slice::Iter<'a, SpringRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Statistics from loading the source table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Data rows read after the header rows
    pub rows_read: usize,

    /// Rows that became records
    pub records_kept: usize,

    /// Rows dropped for a missing latitude, longitude or name
    pub rows_dropped: usize,
}

impl LoadStats {
    /// Percentage of data rows that became records
    pub fn retention_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.records_kept as f64 / self.rows_read as f64) * 100.0
        }
    }
}
