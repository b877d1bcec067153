//! Workload replay against an adaptive frequency cache

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use adaptlfu::{AdaptiveFrequencyCache, CacheStats};
use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::ops::{parse_operation, Operation};

/// Cache shape used by the replay driver
pub type ReplayCache = AdaptiveFrequencyCache<i64, i64>;

/// Counts gathered while replaying a workload
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Records executed (gets + puts)
    pub operations: usize,
    /// `get` records
    pub gets: usize,
    /// `put` records
    pub puts: usize,
    /// Records that failed to parse
    pub unknown: usize,
    /// Entries held when the replay finished
    pub final_len: usize,
}

/// Replay every record from `input`, writing one result line per record to `out`
///
/// Lines are numbered from 1. Blank lines keep their number but produce no
/// output. Bytes that are not UTF-8 are replaced, so such a line reports as
/// an unknown record. When `quiet` is set nothing is written to `out`.
pub fn replay<R: BufRead, W: Write>(
    mut input: R,
    cache: &mut ReplayCache,
    out: &mut W,
    quiet: bool,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    let mut buf = Vec::new();
    let mut n: usize = 0;

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read line {}", n + 1))?;
        if read == 0 {
            break;
        }
        n += 1;

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let report = match parse_operation(&line) {
            Ok(Operation::Get(key)) => {
                summary.gets += 1;
                match cache.get(&key) {
                    Some(value) => format!("Operation {}: Get {}, Result: {}", n, key, value),
                    None => format!("Operation {}: Get {}, Result: miss", n, key),
                }
            }
            Ok(Operation::Put(key, value)) => {
                summary.puts += 1;
                let evicted = cache
                    .put(key, value)
                    .with_context(|| format!("operation {} failed", n))?;
                if let Some((old_key, _)) = evicted {
                    debug!(line = n, evicted = old_key, "evicted");
                }
                format!("Operation {}: Put {}, Cache Updated: {}", n, key, format_entries(cache))
            }
            Err(e) => {
                summary.unknown += 1;
                warn!(line = n, "{}", e);
                format!("Operation {}: Unknown Operation", n)
            }
        };

        if !quiet {
            writeln!(out, "{}", report)?;
        }
    }

    summary.operations = summary.gets + summary.puts;
    summary.final_len = cache.len();
    Ok(summary)
}

/// Open a workload file and replay it
pub fn replay_file<P: AsRef<Path>, W: Write>(
    path: P,
    cache: &mut ReplayCache,
    out: &mut W,
    quiet: bool,
) -> Result<ReplaySummary> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open workload file {}", path.display()))?;

    replay(BufReader::new(file), cache, out, quiet)
}

/// Render cache contents as `{k1: v1, k2: v2}` ordered by key
pub fn format_entries(cache: &ReplayCache) -> String {
    let body = cache
        .sorted_entries()
        .into_iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// One-line summary printed after the per-operation output
pub fn format_summary(summary: &ReplaySummary, stats: &CacheStats) -> String {
    format!(
        "{} operations ({} gets, {} puts, {} unknown), hit ratio {:.3}, {} evictions, {} entries cached",
        summary.operations,
        summary.gets,
        summary.puts,
        summary.unknown,
        stats.hit_ratio(),
        stats.evictions(),
        summary.final_len
    )
}
