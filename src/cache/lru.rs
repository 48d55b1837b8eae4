//! LRU Tracker Module
//!
//! Orders keys by recency of access for eviction.
//!
//! Every insertion and successful read draws a fresh tick from a logical
//! clock. Ticks are unique, so the order is total even when two accesses
//! share the same wall-clock millisecond.

use std::collections::BTreeMap;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are indexed by their latest access tick:
/// - First entry = least recently used
/// - Last entry = most recently used
#[derive(Debug)]
pub struct LruTracker {
    /// Access tick -> key
    order: BTreeMap<u64, String>,
    /// Next tick to hand out
    next_seq: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
            next_seq: 1,
        }
    }

    // == Touch ==
    /// Marks a key as most recently used and returns its new tick.
    ///
    /// `previous` is the tick the key was last recorded under, if any.
    pub fn touch(&mut self, key: &str, previous: Option<u64>) -> u64 {
        if let Some(seq) = previous {
            self.order.remove(&seq);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, key.to_string());
        seq
    }

    // == Remove ==
    /// Stops tracking the key recorded under `seq`.
    pub fn remove(&mut self, seq: u64) {
        self.order.remove(&seq);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Clear ==
    /// Forgets every key. The tick counter keeps running.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }
}

impl Default for LruTracker {
    fn default() -> Self {
        Self::new()
    }
}
