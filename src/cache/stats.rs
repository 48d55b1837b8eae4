//! Cache Statistics Module
//!
//! Hit, miss and eviction counters plus entry-count and byte usage for a
//! cache snapshot.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache performance metrics.
///
/// Values returned from the store are copies; later cache activity does not
/// change a snapshot already handed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Entries removed by capacity pressure or expiry
    pub evictions: u64,
    /// Current number of entries in the cache
    pub size: usize,
    /// Largest entry count seen after an insert
    pub max_size_observed: usize,
    /// Estimated bytes held by live entries
    pub size_bytes: u64,
    /// Configured byte bound
    pub max_size_bytes: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups served from the cache, 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Size ==
    /// Updates the current entry count without touching the high-water mark.
    pub fn set_size(&mut self, count: usize) {
        self.size = count;
    }

    // == Record Insert ==
    /// Updates the current entry count after an insert and raises the
    /// high-water mark if needed.
    pub fn record_insert(&mut self, count: usize) {
        self.size = count;
        self.max_size_observed = self.max_size_observed.max(count);
    }

    // == Reset ==
    /// Zeroes hits, misses and evictions. Size fields are left alone.
    pub fn reset_counters(&mut self) {
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }
}
