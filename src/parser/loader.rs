//! Spring table loading
//!
//! Reads the bundled table, skips the metadata rows and turns each data row
//! into a [`SpringRecord`](crate::models::SpringRecord). The table is
//! re-read for every request; nothing is cached between calls.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::record_parser::{parse_spring_record, rejection_reason};
use crate::constants::{HEADER_ROWS, columns};
use crate::error::{HotSpringError, Result};
use crate::models::{LoadStats, RecordSet};

/// Records loaded from the source table together with load statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Validated records in source row order
    pub records: RecordSet,

    /// Row counts for reporting
    pub stats: LoadStats,
}

/// Loader for the positional spring table
#[derive(Debug, Clone)]
pub struct SpringLoader {
    source_path: PathBuf,
}

impl SpringLoader {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Load and validate every row of the source table.
    ///
    /// A missing or unreadable file aborts the whole load; no partial
    /// record set is ever returned.
    pub fn load(&self) -> Result<LoadResult> {
        info!("Loading spring table: {}", self.source_path.display());

        let file = File::open(&self.source_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => HotSpringError::SourceNotFound {
                path: self.source_path.clone(),
            },
            _ => HotSpringError::Io(e),
        })?;

        self.load_from_reader(file)
    }

    /// Parse table content from any reader, attributing errors to the source path
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<LoadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut stats = LoadStats::default();
        let mut records = Vec::new();
        let mut header_rows_seen = 0;

        for result in csv_reader.records() {
            let row = result.map_err(|source| HotSpringError::SourceRead {
                path: self.source_path.clone(),
                source,
            })?;

            if header_rows_seen < HEADER_ROWS {
                header_rows_seen += 1;
                continue;
            }

            stats.rows_read += 1;
            self.check_width(&row, stats.rows_read)?;
            match parse_spring_record(&row) {
                Some(record) => records.push(record),
                None => {
                    stats.rows_dropped += 1;
                    debug!(
                        "Dropped row {}: {}",
                        stats.rows_read + HEADER_ROWS,
                        rejection_reason(&row)
                    );
                }
            }
        }

        if header_rows_seen < HEADER_ROWS {
            return Err(HotSpringError::MalformedSource {
                path: self.source_path.clone(),
                reason: format!(
                    "expected {} header rows, found {}",
                    HEADER_ROWS, header_rows_seen
                ),
            });
        }

        stats.records_kept = records.len();
        info!(
            "Loaded {} springs from {} rows ({} dropped)",
            stats.records_kept, stats.rows_read, stats.rows_dropped
        );

        Ok(LoadResult {
            records: RecordSet::new(records),
            stats,
        })
    }

    /// The first data row must have exactly the table width; later rows may
    /// be short but never wider.
    fn check_width(&self, row: &csv::StringRecord, data_row: usize) -> Result<()> {
        let width = row.len();
        let fits = if data_row == 1 {
            width == columns::COUNT
        } else {
            width <= columns::COUNT
        };
        if fits {
            return Ok(());
        }

        Err(HotSpringError::MalformedSource {
            path: self.source_path.clone(),
            reason: format!(
                "expected {} columns, found {} in row {}",
                columns::COUNT,
                width,
                data_row + HEADER_ROWS
            ),
        })
    }
}

/// Load the spring table at `path`
pub fn load_records(path: &Path) -> Result<LoadResult> {
    SpringLoader::new(path).load()
}
