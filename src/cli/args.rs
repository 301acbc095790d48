//! Command-line argument definitions for the hot-spring explorer
//!
//! Defines the CLI using the clap derive API. Every subcommand shares the
//! same source/config/logging options and, where records are filtered, the
//! same four range flags.

use crate::config::ExplorerConfig;
use crate::error::{HotSpringError, Result};
use crate::export::ExportFormat;
use crate::filter::FilterQuery;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the hot-spring explorer
///
/// Loads the bundled hot-spring table, filters springs by temperature and
/// pH, and exports them as KML, KMZ or GeoJSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotspring_explorer",
    version,
    about = "Filter and export geolocated hot-spring records as KML, KMZ and GeoJSON"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the table and report row counts and observed ranges
    Summary(SummaryArgs),
    /// Export filtered springs in one format
    Export(ExportArgs),
    /// Export filtered springs in every format
    ExportAll(ExportAllArgs),
    /// Write the map view model (centre, markers, heat points) as JSON
    Map(MapArgs),
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Summary(args) => &args.common,
            Commands::Export(args) => &args.common,
            Commands::ExportAll(args) => &args.common,
            Commands::Map(args) => &args.common,
        }
    }
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Path to the spring table (overrides the config file)
    #[arg(short = 's', long = "source", value_name = "FILE")]
    pub source_path: Option<PathBuf>,

    /// Directory for exported artifacts (overrides the config file)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file
    ///
    /// If not specified, looks for hotspring-explorer/config.json in the
    /// user's config directory and falls back to built-in defaults.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: ExplorerConfig) -> ExplorerConfig {
        if let Some(source) = &self.source_path {
            config = config.with_source_path(source);
        }
        if let Some(output) = &self.output_dir {
            config = config.with_output_dir(output);
        }
        config
    }
}

/// Inclusive range bounds; omitted bounds use the observed range
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct RangeArgs {
    /// Minimum temperature in °F
    #[arg(long = "min-temp", value_name = "F", allow_negative_numbers = true)]
    pub min_temp: Option<f64>,

    /// Maximum temperature in °F
    #[arg(long = "max-temp", value_name = "F", allow_negative_numbers = true)]
    pub max_temp: Option<f64>,

    /// Minimum pH
    #[arg(long = "min-ph", value_name = "PH")]
    pub min_ph: Option<f64>,

    /// Maximum pH
    #[arg(long = "max-ph", value_name = "PH")]
    pub max_ph: Option<f64>,
}

impl RangeArgs {
    /// Reject NaN and infinite bounds
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("--min-temp", self.min_temp),
            ("--max-temp", self.max_temp),
            ("--min-ph", self.min_ph),
            ("--max-ph", self.max_ph),
        ];
        for (flag, value) in bounds {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(HotSpringError::configuration(format!(
                    "{} must be a finite number, got {}",
                    flag, value
                )));
            }
        }
        Ok(())
    }

    pub fn to_query(&self) -> FilterQuery {
        FilterQuery {
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            min_ph: self.min_ph,
            max_ph: self.max_ph,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Export format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: ExportFormat,

    /// Write the artifact to stdout instead of the output directory
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportAllArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct MapArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Output file for the map view JSON; stdout when omitted
    #[arg(long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}
