//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access
//! tracking.

use super::Payload;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Payload,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Last successful read, or insertion time (Unix milliseconds)
    pub last_accessed_at: u64,
    /// Logical access tick; strictly increasing across the store
    pub access_seq: u64,
    /// Number of successful reads
    pub hit_count: u64,
    /// Estimated size recorded at insertion
    pub size_bytes: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry inserted at `now_ms` that lives for `ttl_secs`.
    pub fn new(value: Payload, size_bytes: u64, now_ms: u64, ttl_secs: u64, access_seq: u64) -> Self {
        Self {
            value,
            expires_at: now_ms.saturating_add(ttl_secs.saturating_mul(1000)),
            last_accessed_at: now_ms,
            access_seq,
            hit_count: 0,
            size_bytes,
        }
    }

    // == Is Expired ==
    /// Checks whether a read at `now_ms` must treat the entry as expired.
    ///
    /// Reads see an entry as live up to and including `expires_at`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }

    // == Is Due For Sweep ==
    /// Checks whether the periodic sweep at `now_ms` reclaims this entry.
    ///
    /// The sweep is inclusive of `expires_at`.
    pub fn is_due_for_sweep(&self, now_ms: u64) -> bool {
        self.expires_at <= now_ms
    }

    // == Touch ==
    /// Records a successful read.
    pub fn touch(&mut self, now_ms: u64, access_seq: u64) {
        self.last_accessed_at = now_ms;
        self.access_seq = access_seq;
        self.hit_count += 1;
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds at `now_ms`, 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}
