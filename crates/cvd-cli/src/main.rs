//! cvd - color vision accessibility filters for image files
//!
//! Decodes an image, runs one named filter over it, and writes the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cvd")]
#[command(author, version, about = "Color vision accessibility filters")]
#[command(long_about = "
Applies color vision filters to 8-bit RGB images.

Filters:
  Original      unchanged input
  Deuteranope   simulate deuteranopia
  Dark          darken reddish content
  Blue          shift reddish content toward blue
  Yellow        shift reddish content toward yellow

Examples:
  cvd apply photo.png -o sim.png -f Deuteranope
  cvd apply chart.jpg -o chart_blue.png -f Blue -j 4
  cvd list
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter to an image
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// List available filters
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args)]
struct ApplyArgs {
    /// Input image
    input: PathBuf,

    /// Output image (format from extension)
    #[arg(short, long)]
    output: PathBuf,

    /// Filter name (case-sensitive)
    #[arg(short, long, default_value = "Original")]
    filter: String,
}

/// Installs the log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::List => commands::list::run(cli.verbose),
    }
}
