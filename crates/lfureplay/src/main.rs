//! lfureplay - replay a get/put workload against an adaptive frequency cache

mod ops;
mod prompt;
mod replay;

use std::io::{self, Write};
use std::path::PathBuf;

use adaptlfu::{CacheConfig, DEFAULT_AGING_FACTOR, DEFAULT_BURST_THRESHOLD};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::prompt::prompt_capacity;
use crate::replay::{format_summary, replay_file, ReplayCache};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workload file with one `get <key>` or `put <key> <value>` per line
    #[arg(short, long, default_value = "cpu_operations.txt")]
    file: PathBuf,

    /// Cache capacity (number of items); prompted for when omitted
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Score multiplier applied on every put, in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_AGING_FACTOR)]
    aging_factor: f64,

    /// Score above which reads stop counting
    #[arg(short, long, default_value_t = DEFAULT_BURST_THRESHOLD)]
    burst_threshold: f64,

    /// Skip per-operation lines and print only the final summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only replay output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let capacity = match args.capacity {
        Some(capacity) => capacity,
        None => prompt_capacity(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let config = CacheConfig::new(capacity)
        .with_aging_factor(args.aging_factor)
        .with_burst_threshold(args.burst_threshold);
    let mut cache = ReplayCache::with_config(config).context("failed to create cache")?;

    info!("lfureplay v{}", env!("CARGO_PKG_VERSION"));
    info!("Workload: {}", args.file.display());
    info!(
        capacity,
        aging_factor = args.aging_factor,
        burst_threshold = args.burst_threshold,
        "Cache configured"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = replay_file(&args.file, &mut cache, &mut out, args.quiet)?;

    let stats = cache.stats();
    info!(
        operations = summary.operations,
        unknown = summary.unknown,
        entries = summary.final_len,
        hits = stats.hits(),
        misses = stats.misses(),
        evictions = stats.evictions(),
        "Replay finished"
    );

    writeln!(out, "{}", format_summary(&summary, stats))?;

    Ok(())
}
