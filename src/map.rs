//! Map view model for a filtered record set
//!
//! Tile rendering is left to a front end; this module prepares everything it
//! needs: the centre, one coloured marker per spring with tooltip and popup
//! details, and heat-map points weighted by temperature.

use serde::Serialize;

use crate::constants::{DEFAULT_ZOOM, HOT_BELOW_F, WARM_BELOW_F};
use crate::details::{Detail, DetailKind, format_fahrenheit, record_details};
use crate::filter::RangeFilter;
use crate::models::{Interval, ObservedRanges, RecordSet, SpringRecord};

/// Marker colour class by temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    /// Temperature unknown
    Gray,
    /// Below 100 °F
    Blue,
    /// 100 °F up to 140 °F
    Orange,
    /// 140 °F and above
    Red,
}

impl MarkerColor {
    pub fn for_temperature(temperature_f: Option<f64>) -> Self {
        match temperature_f {
            None => MarkerColor::Gray,
            Some(t) if t < WARM_BELOW_F => MarkerColor::Blue,
            Some(t) if t < HOT_BELOW_F => MarkerColor::Orange,
            Some(_) => MarkerColor::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub tooltip: String,
    pub color: MarkerColor,
    pub details: Vec<Detail>,
    /// One `"Title: value"` line per popup row
    pub popup: Vec<String>,
}

impl Marker {
    pub fn from_record(record: &SpringRecord) -> Self {
        let temperature = record
            .temperature_f
            .map(format_fahrenheit)
            .unwrap_or_else(|| "n/a".to_string());
        let details = record_details(record);

        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            name: record.name.clone(),
            tooltip: format!("{} – {}", record.name, temperature),
            color: MarkerColor::for_temperature(record.temperature_f),
            popup: popup_lines(record, &details),
            details,
        }
    }
}

/// Popup rows; the temperature row is always shown, as `n/a` when unknown
fn popup_lines(record: &SpringRecord, details: &[Detail]) -> Vec<String> {
    let mut lines = Vec::with_capacity(details.len() + 1);
    if record.temperature_f.is_none() {
        lines.push(format!("{}: n/a", DetailKind::Temperature.title()));
    }
    lines.extend(details.iter().map(ToString::to_string));
    lines
}

/// Heat-map sample; serialised as `[lat, lon, weight]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint(pub f64, pub f64, pub f64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub rows: usize,
    pub observed: ObservedRanges,
    pub filter: RangeFilter,
    pub markers: Vec<Marker>,
    pub heat: Vec<HeatPoint>,
}

impl MapView {
    /// Build the view for `records` (already filtered).
    ///
    /// `observed` are the ranges of the full, unfiltered data set; heat
    /// weights are normalised against them.
    pub fn build(
        records: &RecordSet,
        observed: &ObservedRanges,
        filter: RangeFilter,
        default_center: (f64, f64),
    ) -> Self {
        Self {
            center: records.center_or(default_center),
            zoom: DEFAULT_ZOOM,
            rows: records.len(),
            observed: *observed,
            filter,
            markers: records.iter().map(Marker::from_record).collect(),
            heat: heat_points(records, observed.temperature_f),
        }
    }
}

/// Temperature-weighted heat points.
///
/// With a non-degenerate observed range each spring with a temperature gets
/// weight `(t - min) / (max - min)` and springs without one are left out.
/// Otherwise every spring contributes with weight 1.
pub fn heat_points(records: &RecordSet, observed: Option<Interval>) -> Vec<HeatPoint> {
    match observed.filter(|range| !range.is_degenerate()) {
        Some(range) => records
            .iter()
            .filter_map(|r| {
                r.temperature_f.map(|t| {
                    HeatPoint(r.latitude, r.longitude, (t - range.min) / (range.max - range.min))
                })
            })
            .collect(),
        None => records
            .iter()
            .map(|r| HeatPoint(r.latitude, r.longitude, 1.0))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_colors() {
        assert_eq!(MarkerColor::for_temperature(None), MarkerColor::Gray);
        assert_eq!(MarkerColor::for_temperature(Some(99.9)), MarkerColor::Blue);
        assert_eq!(MarkerColor::for_temperature(Some(100.0)), MarkerColor::Orange);
        assert_eq!(MarkerColor::for_temperature(Some(139.0)), MarkerColor::Orange);
        assert_eq!(MarkerColor::for_temperature(Some(140.0)), MarkerColor::Red);
    }

    #[test]
    fn test_marker_tooltip() {
        let record = SpringRecord::new(36.5, -121.9, "Example Spring").with_temperature_f(104.0);
        assert_eq!(Marker::from_record(&record).tooltip, "Example Spring – 104 °F");

        let record = SpringRecord::new(36.5, -121.9, "Unknown");
        let marker = Marker::from_record(&record);
        assert_eq!(marker.tooltip, "Unknown – n/a");
        assert!(marker.details.is_empty());
    }

    #[test]
    fn test_marker_popup_lines() {
        let record = SpringRecord::new(36.5, -121.9, "Example Spring")
            .with_temperature_f(104.0)
            .with_ph(8.1)
            .with_usgs_quad("USGS123");
        assert_eq!(
            Marker::from_record(&record).popup,
            vec!["Temp: 104 °F / 40 °C", "pH: 8.1", "USGS Quad: USGS123"]
        );

        let record = SpringRecord::new(44.46, -110.83, "Unmeasured Seep")
            .with_nearby_location("Old Faithful");
        assert_eq!(
            Marker::from_record(&record).popup,
            vec!["Temp: n/a", "Nearby: Old Faithful"]
        );
    }

    #[test]
    fn test_heat_weights_normalised() {
        let set = RecordSet::new(vec![
            SpringRecord::new(1.0, 1.0, "Cool").with_temperature_f(80.0),
            SpringRecord::new(2.0, 2.0, "Unknown"),
            SpringRecord::new(3.0, 3.0, "Hot").with_temperature_f(180.0),
            SpringRecord::new(4.0, 4.0, "Mid").with_temperature_f(130.0),
        ]);

        let heat = heat_points(&set, set.observed_ranges().temperature_f);
        assert_eq!(
            heat,
            vec![
                HeatPoint(1.0, 1.0, 0.0),
                HeatPoint(3.0, 3.0, 1.0),
                HeatPoint(4.0, 4.0, 0.5)
            ]
        );
    }

    #[test]
    fn test_heat_without_temperature_spread() {
        let set = RecordSet::new(vec![
            SpringRecord::new(1.0, 1.0, "A").with_temperature_f(100.0),
            SpringRecord::new(2.0, 2.0, "B"),
        ]);

        let heat = heat_points(&set, set.observed_ranges().temperature_f);
        assert_eq!(heat, vec![HeatPoint(1.0, 1.0, 1.0), HeatPoint(2.0, 2.0, 1.0)]);
    }

    #[test]
    fn test_empty_view_uses_default_center() {
        let view = MapView::build(
            &RecordSet::default(),
            &ObservedRanges::default(),
            RangeFilter::default(),
            (37.09, -95.71),
        );

        assert_eq!(view.center, (37.09, -95.71));
        assert_eq!(view.rows, 0);
        assert!(view.markers.is_empty());
        assert!(view.heat.is_empty());
    }

    #[test]
    fn test_view_serialises_heat_as_triples() {
        let set = RecordSet::new(vec![SpringRecord::new(40.0, -120.0, "A")]);
        let view = MapView::build(
            &set,
            &set.observed_ranges(),
            RangeFilter::default(),
            (37.09, -95.71),
        );

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["heat"], serde_json::json!([[40.0, -120.0, 1.0]]));
        assert_eq!(value["markers"][0]["color"], "gray");
        assert_eq!(value["center"], serde_json::json!([40.0, -120.0]));
    }
}
