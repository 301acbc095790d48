//! Application constants for the hot-spring explorer
//!
//! Column positions of the bundled spring table, default locations,
//! export file names and the thresholds used for map presentation.

// =============================================================================
// Source Table Layout
// =============================================================================

/// Number of metadata/header rows at the top of the source table
pub const HEADER_ROWS: usize = 2;

/// Zero-based column positions within a source row
pub mod columns {
    /// Decimal latitude
    pub const LATITUDE: usize = 2;

    /// Decimal longitude
    pub const LONGITUDE: usize = 4;

    /// Spring name
    pub const NAME: usize = 6;

    /// Temperature in Fahrenheit, free text ("104 F", "~95", "N/A")
    pub const TEMPERATURE_F: usize = 9;

    /// pH, free text ("8.1 pH")
    pub const PH: usize = 18;

    /// Nearest named location
    pub const NEARBY_LOCATION: usize = 21;

    /// USGS quadrangle name
    pub const USGS_QUAD: usize = 24;

    /// Total number of columns in a complete row
    pub const COUNT: usize = 26;
}

/// Pattern for the first signed decimal number in a noisy text field
pub const NUMERIC_PATTERN: &str = r"[-+]?\d*\.?\d+";

/// Cell values read as missing, matched after trimming
pub const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// =============================================================================
// Paths and Defaults
// =============================================================================

/// Default source table, relative to the working directory
pub const DEFAULT_SOURCE_FILE: &str = "data.csv";

/// Default directory for generated artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "static";

/// Application directory name used under the user's config directory
pub const APP_DIR_NAME: &str = "hotspring-explorer";

/// Config file name looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Map centre used when no records survive filtering (continental US)
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);

// =============================================================================
// Export Artifacts
// =============================================================================

pub const KML_FILE_NAME: &str = "hot_springs.kml";
pub const KMZ_FILE_NAME: &str = "hot_springs.kmz";
pub const GEOJSON_FILE_NAME: &str = "hot_springs.geojson";

/// Name of the single entry inside a KMZ archive
pub const KMZ_ENTRY_NAME: &str = "doc.kml";

/// KML 2.2 namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Separator between description parts in KML placemarks
pub const KML_DESCRIPTION_SEPARATOR: &str = " | ";

// =============================================================================
// Map Presentation
// =============================================================================

/// Springs below this temperature (°F) are drawn as warm
pub const WARM_BELOW_F: f64 = 100.0;

/// Springs below this temperature (°F) are drawn as hot, above as very hot
pub const HOT_BELOW_F: f64 = 140.0;

/// Initial zoom level for the rendered map
pub const DEFAULT_ZOOM: u8 = 5;
