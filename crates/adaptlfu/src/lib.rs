//! # adaptlfu
//!
//! Bounded in-memory key-value cache with an adaptive frequency eviction policy.
//!
//! ## Policy
//! - **Score**: every hit adds 1 to a per-key `f64` score
//! - **Burst damping**: a `get` that would lift a score past the burst threshold is ignored
//! - **Aging**: every `put` multiplies all scores by the aging factor
//! - **Eviction**: lowest score goes first, ties broken by the smallest key
//!
//! ## Example
//! ```
//! use adaptlfu::{AdaptiveFrequencyCache, CacheConfig};
//!
//! let config = CacheConfig::new(2).with_aging_factor(1.0);
//! let mut cache = AdaptiveFrequencyCache::with_config(config).unwrap();
//!
//! cache.put(1, "a").unwrap();
//! cache.put(2, "b").unwrap();
//! let evicted = cache.put(3, "c").unwrap();
//!
//! assert_eq!(evicted, Some((1, "a")));
//! assert_eq!(cache.get(&2), Some(&"b"));
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod stats;

pub use cache::AdaptiveFrequencyCache;
pub use config::{CacheConfig, DEFAULT_AGING_FACTOR, DEFAULT_BURST_THRESHOLD};
pub use error::{Error, Result};
pub use stats::CacheStats;
