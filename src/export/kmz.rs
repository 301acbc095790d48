//! KMZ archive generation.
//!
//! A KMZ is a zip archive whose single entry, `doc.kml`, holds name-only
//! placemarks for every record.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::kml::{PlacemarkContent, encode_kml_with};
use crate::constants::KMZ_ENTRY_NAME;
use crate::error::Result;
use crate::models::RecordSet;

/// Encode records as a KMZ archive
pub fn encode_kmz(records: &RecordSet) -> Result<Vec<u8>> {
    let document = encode_kml_with(records, PlacemarkContent::NameOnly)?;

    // Fixed entry timestamp keeps the archive byte-for-byte reproducible
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    archive.start_file(KMZ_ENTRY_NAME, options)?;
    archive.write_all(&document)?;
    let cursor = archive.finish()?;

    Ok(cursor.into_inner())
}
