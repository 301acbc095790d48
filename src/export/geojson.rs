//! GeoJSON FeatureCollection generation.

use serde::Serialize;

use crate::error::{HotSpringError, Result};
use crate::models::{RecordSet, SpringRecord};

#[derive(Debug, Serialize)]
struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<'a>>,
}

#[derive(Debug, Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Point,
    properties: Properties<'a>,
}

#[derive(Debug, Serialize)]
struct Point {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

/// Absent optional fields serialise as `null`, never omitted
#[derive(Debug, Serialize)]
struct Properties<'a> {
    name: &'a str,
    latitude: f64,
    longitude: f64,
    temperature_f: Option<f64>,
    ph: Option<f64>,
    nearby_location: Option<&'a str>,
    usgs_quad: Option<&'a str>,
}

impl<'a> Feature<'a> {
    fn from_record(record: &'a SpringRecord) -> Result<Self> {
        if !record.has_finite_coordinates() {
            return Err(HotSpringError::invalid_record(
                record.name.clone(),
                format!(
                    "non-finite coordinates ({}, {})",
                    record.latitude, record.longitude
                ),
            ));
        }

        Ok(Self {
            kind: "Feature",
            geometry: Point {
                kind: "Point",
                coordinates: [record.longitude, record.latitude],
            },
            properties: Properties {
                name: &record.name,
                latitude: record.latitude,
                longitude: record.longitude,
                temperature_f: record.temperature_f,
                ph: record.ph,
                nearby_location: record.nearby_location.as_deref(),
                usgs_quad: record.usgs_quad.as_deref(),
            },
        })
    }
}

/// Encode records as a compact GeoJSON FeatureCollection of points
pub fn encode_geojson(records: &RecordSet) -> Result<Vec<u8>> {
    let features = records
        .iter()
        .map(Feature::from_record)
        .collect::<Result<Vec<_>>>()?;

    let collection = FeatureCollection {
        kind: "FeatureCollection",
        features,
    };

    Ok(serde_json::to_vec(&collection)?)
}
