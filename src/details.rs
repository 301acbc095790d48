//! Human-readable details for a spring record
//!
//! Produces structured label/value pairs for the optional fields of a
//! record. Each output format joins them its own way: KML placemark
//! descriptions, map popups.

use crate::models::SpringRecord;
use serde::Serialize;
use std::fmt;

/// Which optional field a detail describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Temperature,
    Ph,
    UsgsQuad,
    NearbyLocation,
}

impl DetailKind {
    /// Compact label used inline in placemark descriptions
    pub fn label(self) -> &'static str {
        match self {
            DetailKind::Temperature => "Temp",
            DetailKind::Ph => "pH",
            DetailKind::UsgsQuad => "USGS",
            DetailKind::NearbyLocation => "Nearby",
        }
    }

    /// Longer label used in popups
    pub fn title(self) -> &'static str {
        match self {
            DetailKind::Temperature => "Temp",
            DetailKind::Ph => "pH",
            DetailKind::UsgsQuad => "USGS Quad",
            DetailKind::NearbyLocation => "Nearby",
        }
    }
}

/// One present optional field, already formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub kind: DetailKind,
    pub value: String,
}

impl Detail {
    /// `"<label> <value>"`
    pub fn inline(&self) -> String {
        format!("{} {}", self.kind.label(), self.value)
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.title(), self.value)
    }
}

/// Details for every present optional field, in display order.
///
/// Absent fields contribute nothing.
pub fn record_details(record: &SpringRecord) -> Vec<Detail> {
    let mut details = Vec::with_capacity(4);

    if let Some(fahrenheit) = record.temperature_f {
        details.push(Detail {
            kind: DetailKind::Temperature,
            value: format_temperature(fahrenheit),
        });
    }
    if let Some(ph) = record.ph {
        details.push(Detail {
            kind: DetailKind::Ph,
            value: format_float(ph),
        });
    }
    if let Some(quad) = &record.usgs_quad {
        details.push(Detail {
            kind: DetailKind::UsgsQuad,
            value: quad.clone(),
        });
    }
    if let Some(location) = &record.nearby_location {
        details.push(Detail {
            kind: DetailKind::NearbyLocation,
            value: location.clone(),
        });
    }

    details
}

/// Join the inline form of each detail with `separator`
pub fn join_inline(details: &[Detail], separator: &str) -> String {
    details
        .iter()
        .map(Detail::inline)
        .collect::<Vec<_>>()
        .join(separator)
}

/// `"104 °F / 40 °C"`, both rounded to whole degrees
pub fn format_temperature(fahrenheit: f64) -> String {
    format!(
        "{} / {:.0} °C",
        format_fahrenheit(fahrenheit),
        crate::models::fahrenheit_to_celsius(fahrenheit)
    )
}

/// `"104 °F"`, rounded to whole degrees
pub fn format_fahrenheit(fahrenheit: f64) -> String {
    format!("{:.0} °F", fahrenheit)
}

/// Print a float keeping at least one fractional digit (`7.0`, `8.1`)
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
