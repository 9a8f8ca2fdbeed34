//! Cache Statistics Module
//!
//! Tracks hit and miss counts and derives the hit ratio.

use serde::Serialize;

// == Cache Stats ==
/// Hit/miss counters for one cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Accesses served from the cache
    pub hits: u64,
    /// Accesses that had to load the resource
    pub misses: u64,
}

// == Stats Snapshot ==
/// Point-in-time view of the counters, as returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub total: u64,
    /// Percentage in `0.0..=100.0`
    pub hit_ratio: f64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Counts one access outcome.
    pub fn record(&mut self, is_hit: bool) {
        if is_hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Total recorded accesses.
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Ratio ==
    /// Returns hits as a percentage of all accesses, or 0.0 before any access.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            total: self.total(),
            hit_ratio: self.hit_ratio(),
        }
    }
}
