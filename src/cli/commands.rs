//! Command implementations for the hot-spring explorer CLI
//!
//! Sets up logging and configuration, then runs the requested command. The
//! loading and encoding work is synchronous and runs on tokio's blocking
//! pool so the caller can race it against Ctrl-C.

use crate::cli::args::{
    Args, Commands, CommonArgs, ExportAllArgs, ExportArgs, MapArgs, OutputFormat, SummaryArgs,
};
use crate::config::ExplorerConfig;
use crate::explorer::SpringExplorer;
use crate::export::ExportFormat;
use crate::models::{Interval, LoadStats, ObservedRanges};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main command runner
pub async fn run(args: Args) -> Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };

    setup_logging(command.common());
    debug!("Command line arguments: {:?}", command);

    let config = load_configuration(command.common())?;
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let explorer = SpringExplorer::new(config);

    match command {
        Commands::Summary(args) => run_summary(explorer, &args).await,
        Commands::Export(args) => run_export(explorer, &args).await,
        Commands::ExportAll(args) => run_export_all(explorer, &args).await,
        Commands::Map(args) => run_map(explorer, &args).await,
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`/`-q`
fn setup_logging(common: &CommonArgs) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = common.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hotspring_explorer={}", level)));
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let installed = if common.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time().compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    // Only the first subscriber per process is installed
    if installed.is_ok() {
        debug!("Logging at level {}", level);
    }
}

/// Layer configuration: defaults, then config file, then CLI overrides
fn load_configuration(common: &CommonArgs) -> Result<ExplorerConfig> {
    let config_file = match &common.config_file {
        Some(path) => Some(path.clone()),
        None => ExplorerConfig::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    let base = match &config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            ExplorerConfig::from_file(path)?
        }
        None => {
            info!("No config file found, using defaults");
            ExplorerConfig::default()
        }
    };

    Ok(common.apply_overrides(base))
}

/// Run synchronous pipeline work on the blocking pool
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> crate::Result<T> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(work)
        .await
        .context("Background task failed")?;
    Ok(outcome?)
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    source: PathBuf,
    stats: LoadStats,
    observed: ObservedRanges,
}

async fn run_summary(explorer: SpringExplorer, args: &SummaryArgs) -> Result<()> {
    let source = explorer.config().source_path.clone();
    let (records, stats) = run_blocking(move || explorer.load())
        .await
        .with_context(|| format!("Failed to load {}", source.display()))?;

    let report = SummaryReport {
        source,
        stats,
        observed: records.observed_ranges(),
    };

    match args.output_format {
        OutputFormat::Human => print_human_summary(&report),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn print_human_summary(report: &SummaryReport) {
    println!("{}", "Hot Spring Table Summary".bright_green().bold());
    println!("  {} {}", "Source:".bright_cyan(), report.source.display());
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        report.stats.rows_read.to_string().bright_white().bold()
    );
    println!(
        "  {} {} ({:.1}%)",
        "Springs kept:".bright_cyan(),
        report.stats.records_kept.to_string().bright_white().bold(),
        report.stats.retention_rate()
    );
    println!(
        "  {} {}",
        "Rows dropped:".bright_cyan(),
        report.stats.rows_dropped.to_string().bright_yellow()
    );
    println!(
        "  {} {}",
        "Temperature (°F):".bright_cyan(),
        describe_range(report.observed.temperature_f)
    );
    println!(
        "  {} {}",
        "pH:".bright_cyan(),
        describe_range(report.observed.ph)
    );
}

fn describe_range(range: Option<Interval>) -> String {
    match range {
        Some(interval) => format!("{} – {}", interval.min, interval.max),
        None => "no values".bright_black().to_string(),
    }
}

async fn run_export(explorer: SpringExplorer, args: &ExportArgs) -> Result<()> {
    args.range.validate()?;
    let query = args.range.to_query();
    let format = args.format;

    if args.stdout {
        let bytes = run_blocking(move || explorer.export_bytes(format, &query))
            .await
            .with_context(|| format!("Failed to export {}", format))?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    let path = run_blocking(move || explorer.export(format, &query))
        .await
        .with_context(|| format!("Failed to export {}", format))?;
    print_exported(format, &path);
    Ok(())
}

fn print_exported(format: ExportFormat, path: &Path) {
    println!(
        "{} {} {}",
        "Exported".bright_green(),
        path.display().to_string().bright_white().bold(),
        format!("({})", format.content_type()).bright_black()
    );
}

async fn run_export_all(explorer: SpringExplorer, args: &ExportAllArgs) -> Result<()> {
    args.range.validate()?;
    let query = args.range.to_query();

    let paths = run_blocking(move || explorer.export_all(&query))
        .await
        .context("Failed to export artifacts")?;

    for (format, path) in ExportFormat::ALL.into_iter().zip(&paths) {
        print_exported(format, path);
    }
    Ok(())
}

async fn run_map(explorer: SpringExplorer, args: &MapArgs) -> Result<()> {
    args.range.validate()?;
    let query = args.range.to_query();

    let view = run_blocking(move || explorer.map_view(&query))
        .await
        .context("Failed to build map view")?;
    let json = serde_json::to_string_pretty(&view)?;

    match &args.output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Map view with {} springs written to {}", view.rows, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
