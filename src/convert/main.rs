//! Postal code conversion.
//!
//! Reads the postal code workbook, normalizes code/settlement pairs
//! and writes the lookup table as JSON.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use irsz::{convert, ConvertReport};

use crate::config::Config;

/// Config file picked up from the project root when `--config` is not given.
const DEFAULT_CONFIG: &str = "irsz.toml";

#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(about = "Convert a postal code workbook into a JSON lookup table")]
struct Args {
    /// Project root that relative paths are resolved against
    #[arg(long)]
    root: Option<PathBuf>,

    /// Workbook to read (default: docs/iranyitoszamok.xls under the root)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file to write (default: assets/postal_codes.json under the root)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log the header row and a preview of the data
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to resolve project root")?,
    };

    let config = load_config(&args, &root)?;
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| root.join(&config.paths.input));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| root.join(&config.paths.output));

    info!("Postal code conversion");
    info!("Input: {}", input.display());
    info!("Output: {}", output.display());

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let report = convert(&input, &output, &config.columns, &pb)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    log_report(&report);

    Ok(())
}

fn load_config(args: &Args, root: &Path) -> Result<Config> {
    if let Some(path) = &args.config {
        info!("Loading config from {}", path.display());
        return Config::load_from_file(path);
    }

    let default_path = root.join(DEFAULT_CONFIG);
    if default_path.exists() {
        info!("Loading config from {}", default_path.display());
        Config::load_from_file(&default_path)
    } else {
        Ok(Config::default())
    }
}

fn log_report(report: &ConvertReport) {
    let stats = &report.rows;
    info!(
        "Processed {} rows: {} added, {} duplicates, {} skipped",
        stats.rows,
        stats.inserted,
        stats.duplicates,
        stats.skipped()
    );
    if stats.skipped() > 0 {
        info!(
            "Skipped rows: {} missing field, {} invalid code, {} empty place",
            stats.missing_field, stats.invalid_code, stats.empty_place
        );
    }

    let summary = &report.lookup;
    info!("Distinct postal codes: {}", summary.codes);
    info!("  - single settlement: {}", summary.single_place);
    info!("  - multiple settlements: {}", summary.multi_place);
}
