//! CLI application for converting warehouse receipt JSON exports to CSV.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use console::style;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use rcpt_core::{RcptConfig, ReceiptExtractor, load_receipt, write_csv};

/// Parse warehouse JSON receipt data into a CSV
#[derive(Parser)]
#[command(name = "rcpt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the receipt JSON file (first value wins when repeated)
    #[arg(short, long = "receipt", action = clap::ArgAction::Append)]
    receipt: Vec<PathBuf>,

    /// Output directory for the generated CSV
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let Some(receipt) = cli.receipt.first() else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    if cli.receipt.len() > 1 {
        debug!(
            "{} receipt paths supplied, using the first",
            cli.receipt.len()
        );
    }

    run(receipt, &cli)
}

fn run(receipt: &Path, cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => RcptConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RcptConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    fs::create_dir_all(&config.output.dir)?;

    let doc = load_receipt(receipt)?;

    let parsed = ReceiptExtractor::from_config(&config.extraction).extract(&doc)?;
    debug!(
        "{} items, transaction date {}",
        parsed.items.len(),
        parsed.metadata.date
    );

    let path = write_csv(&parsed.items, &parsed.metadata, &config.output)?;

    println!("{} Created {}", style("✓").green(), path.display());

    Ok(())
}
