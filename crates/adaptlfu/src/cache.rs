//! Adaptive frequency cache
//!
//! Scores grow by one per hit, stop growing past the burst threshold on reads,
//! and decay by the aging factor on every write. The lowest score is evicted.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::error::{Error, Result};
use crate::stats::CacheStats;

/// Value and score stored together so neither can outlive the other
struct Slot<V> {
    value: V,
    score: f64,
}

/// Bounded cache evicting the entry with the lowest adaptive frequency score
pub struct AdaptiveFrequencyCache<K, V> {
    map: HashMap<K, Slot<V>, RandomState>,
    config: CacheConfig,
    stats: CacheStats,
}

impl<K, V> AdaptiveFrequencyCache<K, V>
where
    K: Hash + Eq + Ord + Clone,
{
    /// Create a cache with the given capacity and default aging/burst settings
    ///
    /// # Returns
    /// * `Err(Error::InvalidConfig)` - capacity is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Create a cache from an explicit configuration
    ///
    /// # Returns
    /// * `Err(Error::InvalidConfig)` - see [`CacheConfig::validate`]
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(config.capacity, RandomState::new()),
            config,
            stats: CacheStats::default(),
        })
    }

    /// Look up a key, bumping its score on a hit
    ///
    /// A hit that would push the score past the burst threshold leaves the
    /// score untouched. Reads never age scores.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let threshold = self.config.burst_threshold;

        match self.map.get_mut(key) {
            Some(slot) => {
                let bumped = slot.score + 1.0;
                if bumped > threshold {
                    trace!(score = slot.score, threshold, "burst damped hit");
                } else {
                    slot.score = bumped;
                }
                self.stats.record_hit();
                Some(&slot.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or overwrite a key, then age every score
    ///
    /// Overwriting adds 1 to the existing score without burst damping. A new
    /// key starts at 1 and, when the cache is full, first evicts the entry
    /// with the lowest score (smallest key on ties).
    ///
    /// # Returns
    /// * `Ok(Some((key, value)))` - the entry evicted to make room
    /// * `Ok(None)` - nothing was evicted
    /// * `Err(Error::InvariantViolation)` - eviction needed but no entry found
    pub fn put(&mut self, key: K, value: V) -> Result<Option<(K, V)>> {
        let mut evicted = None;

        if let Some(slot) = self.map.get_mut(&key) {
            slot.value = value;
            slot.score += 1.0;
            self.stats.record_update();
        } else {
            if self.map.len() >= self.config.capacity {
                evicted = Some(self.evict()?);
            }
            self.map.insert(key, Slot { value, score: 1.0 });
            self.stats.record_insert();
        }

        self.age();
        Ok(evicted)
    }

    /// Look up a key without touching its score or the stats
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key).map(|slot| &slot.value)
    }

    /// Check whether a key is cached
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Current score of a key
    pub fn score(&self, key: &K) -> Option<f64> {
        self.map.get(key).map(|slot| slot.score)
    }

    /// Remove a key and its score
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key).map(|slot| slot.value)
    }

    /// Drop every entry (stats are kept)
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate over entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.map.iter().map(|(key, slot)| (key, &slot.value))
    }

    /// Entries ordered by key
    pub fn sorted_entries(&self) -> Vec<(&K, &V)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Get the number of cached entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Configuration the cache was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zero every counter, leaving entries and scores alone
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Verify size and score bookkeeping
    ///
    /// # Returns
    /// * `Err(Error::InvariantViolation)` - more entries than capacity, or a
    ///   score that is negative or not finite
    pub fn check_invariants(&self) -> Result<()> {
        if self.map.len() > self.config.capacity {
            return Err(Error::invariant(format!(
                "{} entries held with capacity {}",
                self.map.len(),
                self.config.capacity
            )));
        }

        if let Some(slot) = self
            .map
            .values()
            .find(|slot| !slot.score.is_finite() || slot.score < 0.0)
        {
            return Err(Error::invariant(format!("invalid score {}", slot.score)));
        }

        Ok(())
    }

    fn evict(&mut self) -> Result<(K, V)> {
        let victim = self
            .map
            .iter()
            .min_by(|(key_a, a), (key_b, b)| {
                a.score.total_cmp(&b.score).then_with(|| key_a.cmp(key_b))
            })
            .map(|(key, _)| key.clone())
            .ok_or_else(|| {
                Error::invariant(format!(
                    "eviction required at capacity {} but the cache holds no entries",
                    self.config.capacity
                ))
            })?;

        let slot = self
            .map
            .remove(&victim)
            .ok_or_else(|| Error::invariant("eviction victim missing from the map"))?;

        self.stats.record_eviction();
        debug!(score = slot.score, remaining = self.map.len(), "evicted lowest scored entry");

        Ok((victim, slot.value))
    }

    fn age(&mut self) {
        let factor = self.config.aging_factor;
        for slot in self.map.values_mut() {
            slot.score *= factor;
        }
    }
}
