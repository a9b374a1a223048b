//! Graymill CLI - resize and grayscale raw-container images.
//!
//! Graymill reads images in a simple fixed-header container format,
//! shrinks them to fit within a bounding box, reduces them to
//! single-channel grayscale, and writes them back in the same format.
//!
//! # Usage
//!
//! ```bash
//! # Process a single image with configured bounds
//! graymill process scan.gmi
//!
//! # Process a directory with explicit bounds
//! graymill process ./scans/ --max-width 256 --max-height 256
//!
//! # Look at a container header
//! graymill inspect scan.gmi --json
//!
//! # View configuration
//! graymill config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Graymill - resize and grayscale raw-container images.
#[derive(Parser, Debug)]
#[command(name = "graymill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resize and grayscale container images
    Process(cli::process::ProcessArgs),

    /// Show a container file's header and payload state
    Inspect(cli::inspect::InspectArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match graymill_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `graymill config path`."
            );
            graymill_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Graymill v{}", graymill_core::VERSION);

    match cli.command {
        Commands::Process(args) => cli::process::execute(args, &config),
        Commands::Inspect(args) => cli::inspect::execute(args),
        Commands::Config(args) => cli::config::execute(args),
    }
}
