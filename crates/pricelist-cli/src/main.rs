mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pricelist",
    version,
    about = "Extract supplier price lists and find the lowest price per item"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract (description, price) items from a price-list PDF or xlsx
    Extract {
        /// Path to PDF or xlsx file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Replace the catalog JSON file with the extracted items
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Extractor config JSON file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print extraction counters to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Compare a catalog against supplier quotes
    Compare {
        /// Catalog JSON written by `extract --out`
        catalog: PathBuf,

        /// Supplier quotes JSON: {"SUPPLIER": {"DESCRIPTION": "PRICE"}}
        quotes: PathBuf,

        /// Name shown for the supplier whose list seeded the catalog
        #[arg(short, long, default_value = "TOUREIRO")]
        reference: String,

        /// Quantities JSON ({"DESCRIPTION": N}); prints a purchase order
        #[arg(short, long, value_name = "FILE")]
        quantities: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect extractor configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as JSON
    Show {
        /// Config file to load instead of the defaults
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Validate a config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            config,
            stats,
        } => commands::extract::run(input_file, &output, out, config, stats),
        Commands::Compare {
            catalog,
            quotes,
            reference,
            quantities,
            output,
        } => commands::compare::run(catalog, quotes, &reference, quantities, &output),
        Commands::Config { action } => match action {
            ConfigAction::Show { config } => commands::config::show(config),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
