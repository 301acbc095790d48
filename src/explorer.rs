//! Request-level pipeline: load, filter, then map or export.
//!
//! Each call re-reads the source table and works on its own record set, so
//! independent calls can run concurrently without sharing mutable state.

use std::path::PathBuf;
use tracing::info;

use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::export::{ExportFormat, write_export};
use crate::filter::{FilterQuery, RangeFilter};
use crate::map::MapView;
use crate::models::{LoadStats, ObservedRanges, RecordSet};
use crate::parser::SpringLoader;

/// Records that survived a filter, with the context they were filtered in
#[derive(Debug, Clone)]
pub struct FilteredRecords {
    pub records: RecordSet,
    pub filter: RangeFilter,
    /// Ranges observed across the full, unfiltered table
    pub observed: ObservedRanges,
    pub stats: LoadStats,
}

/// Entry point tying loader, filter, encoders and map view together
#[derive(Debug, Clone)]
pub struct SpringExplorer {
    config: ExplorerConfig,
}

impl SpringExplorer {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Load the complete validated record set
    pub fn load(&self) -> Result<(RecordSet, LoadStats)> {
        let result = SpringLoader::new(&self.config.source_path).load()?;
        Ok((result.records, result.stats))
    }

    /// Load and apply a range query
    pub fn filtered(&self, query: &FilterQuery) -> Result<FilteredRecords> {
        let (all, stats) = self.load()?;
        let observed = all.observed_ranges();
        let filter = RangeFilter::from_query(query, &observed);
        let records = filter.apply(&all);

        info!("Showing {} of {} springs", records.len(), all.len());

        Ok(FilteredRecords {
            records,
            filter,
            observed,
            stats,
        })
    }

    /// Encode the filtered records without touching the filesystem
    pub fn export_bytes(&self, format: ExportFormat, query: &FilterQuery) -> Result<Vec<u8>> {
        let filtered = self.filtered(query)?;
        format.encode(&filtered.records)
    }

    /// Encode the filtered records into the configured output directory
    pub fn export(&self, format: ExportFormat, query: &FilterQuery) -> Result<PathBuf> {
        let filtered = self.filtered(query)?;
        write_export(format, &filtered.records, &self.config.output_dir)
    }

    /// Filter once and write every export format into the output directory
    pub fn export_all(&self, query: &FilterQuery) -> Result<Vec<PathBuf>> {
        let filtered = self.filtered(query)?;
        ExportFormat::ALL
            .iter()
            .map(|format| write_export(*format, &filtered.records, &self.config.output_dir))
            .collect()
    }

    /// Build the map view for a range query
    pub fn map_view(&self, query: &FilterQuery) -> Result<MapView> {
        let filtered = self.filtered(query)?;
        Ok(MapView::build(
            &filtered.records,
            &filtered.observed,
            filtered.filter,
            self.config.default_center,
        ))
    }
}
