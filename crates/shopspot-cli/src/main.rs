//! shopspot - find the best spot for a new shop
//!
//! Reads test cases (city size, existing shops, walking distances) from a
//! file or stdin and prints, for every walking distance, how many shops the
//! best empty cell can reach and where that cell is.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shopspot_input::{CaseReader, InputLimits, RunMode, load_limits, process_stream};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// shopspot - find the best spot for a new shop
#[derive(Parser, Debug)]
#[command(name = "shopspot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read cases from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input limits file (.ron, .toml or .json)
    #[arg(short, long)]
    limits: Option<PathBuf>,

    /// Evaluate queries on all CPU cores
    #[arg(long)]
    parallel: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let limits = match &cli.limits {
        Some(path) => load_limits(path)
            .with_context(|| format!("failed to load limits from {}", path.display()))?,
        None => InputLimits::default(),
    };

    let source: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mode = if cli.parallel {
        RunMode::Parallel
    } else {
        RunMode::Sequential
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let answered = process_stream(CaseReader::with_limits(source, limits), &mut out, mode)
        .context("failed to process cases")?;
    info!(cases = answered, ?mode, "done");

    Ok(())
}
