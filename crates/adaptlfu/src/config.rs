//! Cache configuration

use crate::error::{Error, Result};

/// Aging factor used when none is given
pub const DEFAULT_AGING_FACTOR: f64 = 0.9;

/// Burst threshold used when none is given
pub const DEFAULT_BURST_THRESHOLD: f64 = 5.0;

/// Immutable settings for an [`AdaptiveFrequencyCache`](crate::AdaptiveFrequencyCache)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub capacity: usize,

    /// Multiplier applied to every score on each `put`, in (0, 1]
    pub aging_factor: f64,

    /// Score above which `get` stops incrementing
    pub burst_threshold: f64,
}

impl CacheConfig {
    /// Create a config with the given capacity and default aging/burst settings
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            aging_factor: DEFAULT_AGING_FACTOR,
            burst_threshold: DEFAULT_BURST_THRESHOLD,
        }
    }

    /// Set the aging factor
    pub fn with_aging_factor(mut self, aging_factor: f64) -> Self {
        self.aging_factor = aging_factor;
        self
    }

    /// Set the burst threshold
    pub fn with_burst_threshold(mut self, burst_threshold: f64) -> Self {
        self.burst_threshold = burst_threshold;
        self
    }

    /// Check that the settings describe a usable cache
    ///
    /// # Returns
    /// * `Err(Error::InvalidConfig)` - capacity is 0, the aging factor is not
    ///   in (0, 1], or the burst threshold is NaN
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid_config("capacity must be greater than 0"));
        }

        if !self.aging_factor.is_finite() || self.aging_factor <= 0.0 || self.aging_factor > 1.0 {
            return Err(Error::invalid_config(format!(
                "aging factor must be in (0, 1], got {}",
                self.aging_factor
            )));
        }

        if self.burst_threshold.is_nan() {
            return Err(Error::invalid_config("burst threshold must be a number"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::new(16);

        assert_eq!(config.capacity, 16);
        assert_eq!(config.aging_factor, 0.9);
        assert_eq!(config.burst_threshold, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = CacheConfig::new(4)
            .with_aging_factor(0.5)
            .with_burst_threshold(10.0);

        assert_eq!(config.aging_factor, 0.5);
        assert_eq!(config.burst_threshold, 10.0);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = CacheConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_aging_factor_range() {
        assert!(CacheConfig::new(1).with_aging_factor(1.0).validate().is_ok());
        assert!(CacheConfig::new(1).with_aging_factor(0.01).validate().is_ok());

        for bad in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let result = CacheConfig::new(1).with_aging_factor(bad).validate();
            assert!(result.is_err(), "aging factor {} accepted", bad);
        }
    }

    #[test]
    fn test_burst_threshold() {
        assert!(CacheConfig::new(1)
            .with_burst_threshold(f64::INFINITY)
            .validate()
            .is_ok());
        assert!(CacheConfig::new(1)
            .with_burst_threshold(f64::NAN)
            .validate()
            .is_err());
    }
}
