//! Per-cache usage counters

/// Counters updated by [`AdaptiveFrequencyCache`](crate::AdaptiveFrequencyCache)
///
/// The cache is single-owner, so counters are plain integers bumped through
/// `&mut`. `CacheStats` is `Copy`; callers can keep a snapshot and diff it
/// against a later one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    inserts: u64,
    updates: u64,
    evictions: u64,
}

impl CacheStats {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// `get` calls that found the key
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// `get` calls that missed
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// `put` calls that added a new key
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// `put` calls that overwrote an existing key
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Entries dropped to make room
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Total `get` calls
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Total `put` calls
    pub fn writes(&self) -> u64 {
        self.inserts + self.updates
    }

    /// Fraction of lookups that hit, 0.0 before the first lookup
    pub fn hit_ratio(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }
}
