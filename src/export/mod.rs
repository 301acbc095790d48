//! Export encoders for filtered spring records
//!
//! Three independent, stateless transforms from a [`RecordSet`] to bytes:
//!
//! - [`kml`] - one placemark per record with a description of present fields
//! - [`kmz`] - name-only placemarks zipped as a single `doc.kml` entry
//! - [`geojson`] - a FeatureCollection of points carrying every field
//!
//! Encoders expect already-validated records and fail on non-finite
//! coordinates instead of writing them. Output is deterministic for a given
//! record set.

pub mod geojson;
pub mod kml;
pub mod kmz;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::constants::{GEOJSON_FILE_NAME, KML_FILE_NAME, KMZ_FILE_NAME};
use crate::error::{HotSpringError, Result};
use crate::models::RecordSet;

pub use geojson::encode_geojson;
pub use kml::encode_kml;
pub use kmz::encode_kmz;

/// Downloadable export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Kml,
    Kmz,
    #[value(name = "geojson")]
    GeoJson,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Kml, ExportFormat::Kmz, ExportFormat::GeoJson];

    /// Fixed attachment file name
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Kml => KML_FILE_NAME,
            ExportFormat::Kmz => KMZ_FILE_NAME,
            ExportFormat::GeoJson => GEOJSON_FILE_NAME,
        }
    }

    /// MIME type for serving the artifact
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Kml => "application/vnd.google-earth.kml+xml",
            ExportFormat::Kmz => "application/vnd.google-earth.kmz",
            ExportFormat::GeoJson => "application/geo+json",
        }
    }

    /// Encode records in this format
    pub fn encode(self, records: &RecordSet) -> Result<Vec<u8>> {
        match self {
            ExportFormat::Kml => encode_kml(records),
            ExportFormat::Kmz => encode_kmz(records),
            ExportFormat::GeoJson => encode_geojson(records),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Kml => "kml",
            ExportFormat::Kmz => "kmz",
            ExportFormat::GeoJson => "geojson",
        };
        f.write_str(name)
    }
}

/// Encode records and write them to `output_dir/<file_name>`.
///
/// The artifact is written to a temporary file in the same directory and
/// renamed into place, so a failure never leaves a partial export behind.
pub fn write_export(format: ExportFormat, records: &RecordSet, output_dir: &Path) -> Result<PathBuf> {
    let bytes = format.encode(records)?;

    std::fs::create_dir_all(output_dir)?;
    let target = output_dir.join(format.file_name());

    let mut temp_file = NamedTempFile::new_in(output_dir)?;
    temp_file.write_all(&bytes)?;
    temp_file.flush()?;
    temp_file
        .persist(&target)
        .map_err(|e| HotSpringError::Io(e.error))?;

    info!(
        "Wrote {} springs to {} ({} bytes)",
        records.len(),
        target.display(),
        bytes.len()
    );

    Ok(target)
}
