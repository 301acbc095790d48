//! Hot Spring Explorer Library
//!
//! Loads geolocated hot-spring records from a fixed-layout CSV table,
//! filters them by temperature and pH, and exports them for mapping tools.
//!
//! This library provides tools for:
//! - Parsing the positional spring table with tolerant numeric extraction
//! - Filtering records by inclusive temperature and pH ranges
//! - Exporting KML, KMZ and GeoJSON artifacts
//! - Preparing a map view model (centre, markers, heat points) for a front end

pub mod config;
pub mod constants;
pub mod details;
pub mod error;
pub mod explorer;
pub mod export;
pub mod filter;
pub mod map;
pub mod models;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ExplorerConfig;
pub use error::{HotSpringError, Result};
pub use explorer::SpringExplorer;
pub use export::ExportFormat;
pub use filter::{FilterQuery, RangeFilter};
pub use models::{RecordSet, SpringRecord};
