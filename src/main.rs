use clap::Parser;
use hotspring_explorer::HotSpringError;
use hotspring_explorer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(HotSpringError::Interrupted {
                    reason: "interrupted by user".to_string(),
                }
                .into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Hot Spring Explorer - hot-spring map data and exports");
    println!("=====================================================");
    println!();
    println!("Load the bundled hot-spring table, filter springs by temperature and pH,");
    println!("and export them as KML, KMZ or GeoJSON.");
    println!();
    println!("USAGE:");
    println!("    hotspring_explorer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Report row counts and observed temperature/pH ranges");
    println!("    export      Export filtered springs in one format");
    println!("    export-all  Export filtered springs as KML, KMZ and GeoJSON");
    println!("    map         Write the map view model as JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Export springs between 100 and 150 °F as GeoJSON:");
    println!("    hotspring_explorer export --format geojson --min-temp 100 --max-temp 150");
    println!();
    println!("    # Write all three artifacts into ./static:");
    println!("    hotspring_explorer export-all --source data.csv --output-dir static");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hotspring_explorer <COMMAND> --help");
}
