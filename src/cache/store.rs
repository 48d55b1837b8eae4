//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking, TTL
//! expiration and a byte budget measured by estimated payload size.
//!
//! The store itself is single-threaded (`&mut self`); share it across
//! threads through [`SharedCache`](crate::cache::SharedCache).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{estimate_size, CacheEntry, CacheStats, Clock, LruTracker, Payload, SystemClock};

// == Defaults ==
/// Default byte budget (50 MB)
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Default TTL in seconds for entries stored without one
pub const DEFAULT_TTL_SECS: u64 = 300;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Configuration in effect after [`CacheStore::reconfigure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconfigured {
    pub max_size_bytes: u64,
    pub default_ttl_secs: u64,
    /// Bytes still held once the new budget was enforced
    pub size_bytes: u64,
    /// Entries evicted to fit the new budget
    pub evicted: usize,
}

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Sum of `size_bytes` over all entries
    current_size_bytes: u64,
    /// Byte budget enforced by eviction
    max_size_bytes: u64,
    /// TTL applied when a caller passes a non-positive TTL
    default_ttl_secs: u64,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given byte budget and default TTL.
    ///
    /// # Arguments
    /// * `max_size_bytes` - Upper bound on the estimated size of all entries
    /// * `default_ttl_secs` - TTL used when `put` receives `ttl_secs <= 0`
    pub fn new(max_size_bytes: u64, default_ttl_secs: u64) -> Self {
        Self::with_clock(max_size_bytes, default_ttl_secs, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(max_size_bytes: u64, default_ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            current_size_bytes: 0,
            max_size_bytes,
            default_ttl_secs,
            clock,
        }
    }

    // == Get ==
    /// Retrieves a copy of the payload stored under `key`.
    ///
    /// Returns `None` when the key is absent or expired. An expired entry is
    /// removed on the spot and counted as both a miss and an eviction.
    pub fn get(&mut self, key: &str) -> Option<Payload> {
        self.get_with_ttl(key).map(|(value, _)| value)
    }

    /// Same as [`get`](Self::get), also returning the milliseconds left
    /// before the entry expires.
    pub fn get_with_ttl(&mut self, key: &str) -> Option<(Payload, u64)> {
        let now = self.clock.now_ms();

        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(now) {
            self.remove_entry(key);
            self.stats.record_eviction();
            self.stats.record_miss();
            self.debug_check_accounting();
            return None;
        }

        let seq = self.lru.touch(key, Some(entry.access_seq));
        entry.touch(now, seq);
        self.stats.record_hit();
        Some((entry.value.clone(), entry.ttl_remaining_ms(now)))
    }

    // == Put ==
    /// Stores `value` under `key` for `ttl_secs` seconds.
    ///
    /// A non-positive `ttl_secs` uses the default TTL. Storing over an
    /// existing key replaces its value and resets its TTL. When the budget
    /// is exceeded, least recently used entries are evicted until the new
    /// entry fits or the store is empty; the write itself is never refused.
    pub fn put(&mut self, key: impl Into<String>, value: Payload, ttl_secs: i64) {
        let key = key.into();
        let ttl = if ttl_secs <= 0 {
            self.default_ttl_secs
        } else {
            ttl_secs as u64
        };
        let new_size = estimate_size(&value);

        // Release the previous version first so it is not counted twice
        self.remove_entry(&key);

        if new_size > self.max_size_bytes {
            warn!(
                key = %key,
                size_bytes = new_size,
                max_size_bytes = self.max_size_bytes,
                "Payload larger than the cache budget; storing it alone"
            );
        }
        self.evict_until_fits(new_size);

        let now = self.clock.now_ms();
        let seq = self.lru.touch(&key, None);
        self.entries
            .insert(key, CacheEntry::new(value, new_size, now, ttl, seq));
        self.current_size_bytes += new_size;
        self.stats.record_insert(self.entries.len());

        self.debug_check_accounting();
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Returns whether an entry was removed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.remove_entry(key).is_some();
        self.debug_check_accounting();
        removed
    }

    // == Invalidate Pattern ==
    /// Removes every entry whose key contains `pattern`, ignoring case.
    ///
    /// Returns the number of entries removed. An empty pattern matches
    /// every key.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> usize {
        let needle = pattern.to_lowercase();

        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        for key in &matching {
            self.remove_entry(key);
        }

        self.debug_check_accounting();
        matching.len()
    }

    // == Clear ==
    /// Drops every entry. Hit, miss and eviction counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.current_size_bytes = 0;
        self.stats.set_size(0);
    }

    // == Configuration ==
    /// Sets the byte budget, evicting least recently used entries right away
    /// until usage fits. Returns the number of entries evicted.
    pub fn set_max_size(&mut self, max_size_bytes: u64) -> usize {
        self.max_size_bytes = max_size_bytes;
        let evicted = self.evict_until_fits(0);
        self.debug_check_accounting();
        evicted
    }

    /// Same as [`set_max_size`](Self::set_max_size) with the budget in
    /// megabytes.
    pub fn set_max_size_mb(&mut self, max_size_mb: u64) -> usize {
        self.set_max_size(max_size_mb.saturating_mul(BYTES_PER_MB))
    }

    /// Sets the TTL used for future writes without one. Stored entries keep
    /// their expiry.
    pub fn set_default_ttl(&mut self, default_ttl_secs: u64) {
        self.default_ttl_secs = default_ttl_secs;
    }

    /// Applies a new budget and/or default TTL and reports the resulting
    /// configuration in one step.
    pub fn reconfigure(
        &mut self,
        max_size_bytes: Option<u64>,
        default_ttl_secs: Option<u64>,
    ) -> Reconfigured {
        let evicted = max_size_bytes.map_or(0, |bytes| self.set_max_size(bytes));
        if let Some(ttl) = default_ttl_secs {
            self.set_default_ttl(ttl);
        }

        Reconfigured {
            max_size_bytes: self.max_size_bytes,
            default_ttl_secs: self.default_ttl_secs,
            size_bytes: self.current_size_bytes,
            evicted,
        }
    }

    // == Sweep Expired ==
    /// Removes every entry whose expiry is at or before now.
    ///
    /// Each removal counts as an eviction. Returns the number removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now_ms();

        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_due_for_sweep(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            if self.remove_entry(key).is_some() {
                self.stats.record_eviction();
            }
        }

        self.debug_check_accounting();
        expired_keys.len()
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats.size_bytes = self.current_size_bytes;
        stats.max_size_bytes = self.max_size_bytes;
        stats
    }

    /// Zeroes hits, misses and evictions and returns the resulting snapshot.
    pub fn reset_stats(&mut self) -> CacheStats {
        self.stats.reset_counters();
        self.stats()
    }

    // == Introspection ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Estimated bytes held by all entries.
    pub fn size_bytes(&self) -> u64 {
        self.current_size_bytes
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn default_ttl_secs(&self) -> u64 {
        self.default_ttl_secs
    }

    /// Successful reads of `key` since it was last stored, without counting
    /// as an access.
    pub fn hit_count(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.hit_count)
    }

    /// Checks that the running byte total equals the sum of entry sizes and
    /// that every entry is tracked for eviction.
    pub fn verify_size_accounting(&self) -> bool {
        let total: u64 = self.entries.values().map(|entry| entry.size_bytes).sum();
        total == self.current_size_bytes && self.lru.len() == self.entries.len()
    }

    // == Internals ==
    /// Removes an entry and releases its size. No stats besides `size`.
    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(entry.access_seq);
        self.current_size_bytes -= entry.size_bytes;
        self.stats.set_size(self.entries.len());
        Some(entry)
    }

    /// Evicts least recently used entries until `incoming` more bytes fit.
    fn evict_until_fits(&mut self, incoming: u64) -> usize {
        let mut evicted = 0;

        while self.current_size_bytes.saturating_add(incoming) > self.max_size_bytes
            && !self.entries.is_empty()
        {
            // Fall back to any entry if the tracker has nothing usable
            let victim = self
                .lru
                .evict_oldest()
                .filter(|key| self.entries.contains_key(key))
                .or_else(|| self.entries.keys().next().cloned());
            let Some(victim) = victim else {
                break;
            };

            if let Some(entry) = self.remove_entry(&victim) {
                debug!(
                    key = %victim,
                    size_bytes = entry.size_bytes,
                    "Evicted least recently used entry"
                );
                self.stats.record_eviction();
                evicted += 1;
            }
        }

        evicted
    }

    fn debug_check_accounting(&self) {
        debug_assert!(
            self.verify_size_accounting(),
            "size accounting drifted: tracked {} bytes",
            self.current_size_bytes
        );
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE_BYTES, DEFAULT_TTL_SECS)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde_json::json;

    /// Payload whose compact JSON form is exactly `total` bytes (min 8).
    fn blob(total: usize) -> Payload {
        let filler = "x".repeat(total - 8);
        json!({ "d": filler }).as_object().cloned().unwrap()
    }

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    fn store_with_clock(max_size_bytes: u64) -> (CacheStore, ManualClock) {
        let clock = ManualClock::starting_at(1_000_000);
        let store = CacheStore::with_clock(max_size_bytes, 300, Arc::new(clock.clone()));
        (store, clock)
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::default();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.size_bytes(), 0);
        assert_eq!(store.max_size_bytes(), DEFAULT_MAX_SIZE_BYTES);
        assert_eq!(store.default_ttl_secs(), DEFAULT_TTL_SECS);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(1024, 300);
        let value = payload(json!({"title": "general", "members": 12}));

        store.put("chat:1:info", value.clone(), 60);

        assert_eq!(store.get("chat:1:info"), Some(value.clone()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), estimate_size(&value));
    }

    #[test]
    fn test_store_get_with_ttl_counts_down() {
        let (mut store, clock) = store_with_clock(1024);
        store.put("user:7:info", blob(20), 30);

        clock.advance_secs(12);
        let (value, ttl_ms) = store.get_with_ttl("user:7:info").unwrap();

        assert_eq!(value, blob(20));
        assert_eq!(ttl_ms, 18_000);
        assert_eq!(store.stats().hits, 1);
        assert_eq!(store.hit_count("user:7:info"), Some(1));
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(1024, 300);

        assert_eq!(store.get("nonexistent"), None);
        assert_eq!(store.stats().misses, 1);
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_invalidate() {
        let mut store = CacheStore::new(1024, 300);

        store.put("key1", blob(20), 60);
        assert!(store.invalidate("key1"));

        assert!(store.is_empty());
        assert_eq!(store.size_bytes(), 0);
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_invalidate_nonexistent() {
        let mut store = CacheStore::new(1024, 300);
        store.put("key1", blob(20), 60);

        assert!(!store.invalidate("nonexistent"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), 20);
    }

    #[test]
    fn test_store_overwrite_releases_old_size() {
        let mut store = CacheStore::new(1024, 300);

        store.put("key1", blob(100), 60);
        store.put("key1", blob(40), 60);

        assert_eq!(store.get("key1"), Some(blob(40)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), 40);
    }

    #[test]
    fn test_store_overwrite_resets_ttl_and_hits() {
        let (mut store, clock) = store_with_clock(1024);

        store.put("key1", blob(20), 10);
        store.get("key1");
        clock.advance_secs(8);
        store.put("key1", blob(20), 10);
        clock.advance_secs(8);

        assert_eq!(store.hit_count("key1"), Some(0));
        assert!(store.get("key1").is_some(), "Refresh should restart the TTL");
    }

    #[test]
    fn test_store_refresh_does_not_evict_when_it_fits() {
        let mut store = CacheStore::new(200, 300);

        store.put("a", blob(100), 60);
        store.put("b", blob(100), 60);
        store.put("a", blob(100), 60);

        assert_eq!(store.len(), 2);
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_lazy_expiry() {
        let (mut store, clock) = store_with_clock(1024);

        store.put("key1", blob(20), 60);
        assert!(store.get("key1").is_some());

        clock.advance_secs(61);

        assert_eq!(store.get("key1"), None);
        let stats = store.stats();
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(store.size_bytes(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_entry_live_at_exact_expiry() {
        let (mut store, clock) = store_with_clock(1024);

        store.put("key1", blob(20), 60);
        clock.advance_secs(60);

        assert!(store.get("key1").is_some());
    }

    #[test]
    fn test_store_non_positive_ttl_uses_default() {
        let (mut store, clock) = store_with_clock(1024);
        store.set_default_ttl(10);

        store.put("zero", blob(20), 0);
        store.put("negative", blob(20), -5);
        store.put("explicit", blob(20), 100);

        clock.advance_secs(11);

        assert_eq!(store.get("zero"), None);
        assert_eq!(store.get("negative"), None);
        assert!(store.get("explicit").is_some());
    }

    #[test]
    fn test_store_default_ttl_change_keeps_existing_expiry() {
        let (mut store, clock) = store_with_clock(1024);
        store.set_default_ttl(10);

        store.put("key1", blob(20), 0);
        store.set_default_ttl(1000);
        clock.advance_secs(11);

        assert_eq!(store.get("key1"), None);
        assert_eq!(store.default_ttl_secs(), 1000);
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = CacheStore::new(300, 300);

        store.put("key1", blob(100), 60);
        store.put("key2", blob(100), 60);
        store.put("key3", blob(100), 60);

        // Full, adding key4 should evict key1 (oldest)
        store.put("key4", blob(100), 60);

        assert_eq!(store.len(), 3);
        assert_eq!(store.stats().evictions, 1);
        assert_eq!(store.get("key1"), None);
        assert!(store.get("key2").is_some());
        assert!(store.get("key3").is_some());
        assert!(store.get("key4").is_some());
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut store = CacheStore::new(300, 300);

        store.put("A", blob(100), 60);
        store.put("B", blob(100), 60);
        store.put("C", blob(100), 60);

        // Access A to make it most recently used
        store.get("A");

        // Adding D should evict B (now oldest)
        store.put("D", blob(100), 60);

        assert_eq!(store.stats().evictions, 1);
        assert!(store.get("A").is_some());
        assert_eq!(store.get("B"), None);
        assert!(store.get("C").is_some());
        assert!(store.get("D").is_some());
    }

    #[test]
    fn test_store_evicts_several_entries_for_large_payload() {
        let mut store = CacheStore::new(300, 300);

        store.put("a", blob(100), 60);
        store.put("b", blob(100), 60);
        store.put("c", blob(100), 60);
        store.put("big", blob(250), 60);

        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().evictions, 3);
        assert_eq!(store.size_bytes(), 250);
    }

    #[test]
    fn test_store_oversized_payload_is_stored_alone() {
        let mut store = CacheStore::new(100, 300);

        store.put("a", blob(50), 60);
        store.put("b", blob(50), 60);
        store.put("huge", blob(500), 60);

        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), 500);
        assert!(store.size_bytes() > store.max_size_bytes());
        assert!(store.get("huge").is_some());
        assert!(store.verify_size_accounting());
    }

    #[test]
    fn test_store_invalidate_pattern() {
        let mut store = CacheStore::new(1024, 300);

        store.put("chat:1:info", blob(20), 60);
        store.put("chat:2:info", blob(20), 60);
        store.put("user:1:info", blob(20), 60);

        assert_eq!(store.invalidate_pattern("chat"), 2);

        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), 20);
        assert!(store.get("user:1:info").is_some());
        assert_eq!(store.get("chat:1:info"), None);
        assert_eq!(store.get("chat:2:info"), None);
    }

    #[test]
    fn test_store_invalidate_pattern_ignores_case() {
        let mut store = CacheStore::new(1024, 300);

        store.put("chat:1:info", blob(20), 60);
        store.put("Chat:2:Info", blob(20), 60);
        store.put("user:1:info", blob(20), 60);

        assert_eq!(store.invalidate_pattern("CHAT"), 2);
        assert_eq!(store.len(), 1);
        assert!(store.get("user:1:info").is_some());
    }

    #[test]
    fn test_store_invalidate_pattern_no_match() {
        let mut store = CacheStore::new(1024, 300);
        store.put("chat:1:info", blob(20), 60);

        assert_eq!(store.invalidate_pattern("wallet"), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_clear_keeps_counters() {
        let mut store = CacheStore::new(1024, 300);

        store.put("key1", blob(20), 60);
        store.put("key2", blob(20), 60);
        store.get("key1");
        store.get("missing");

        store.clear();

        let stats = store.stats();
        assert!(store.is_empty());
        assert_eq!(store.size_bytes(), 0);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.max_size_observed, 2);
    }

    #[test]
    fn test_store_set_max_size_shrinks_immediately() {
        let mut store = CacheStore::new(50 * BYTES_PER_MB, 300);
        let one_mb = blob(BYTES_PER_MB as usize);

        for i in 0..40 {
            store.put(format!("page:{i}"), one_mb.clone(), 600);
        }
        assert_eq!(store.size_bytes(), 40 * BYTES_PER_MB);

        let evicted = store.set_max_size_mb(10);

        assert_eq!(evicted, 30);
        assert!(store.size_bytes() <= 10 * BYTES_PER_MB);
        assert_eq!(store.len(), 10);
        assert_eq!(store.stats().evictions, 30);
        // The most recent writes survive
        assert!(store.get("page:39").is_some());
        assert_eq!(store.get("page:29"), None);
    }

    #[test]
    fn test_store_reconfigure_reports_applied_settings() {
        let mut store = CacheStore::new(1_000, 300);
        for key in ["a", "b", "c", "d"] {
            store.put(key, blob(100), 60);
        }

        let applied = store.reconfigure(Some(250), Some(45));

        assert_eq!(
            applied,
            Reconfigured {
                max_size_bytes: 250,
                default_ttl_secs: 45,
                size_bytes: 200,
                evicted: 2,
            }
        );
        assert_eq!(store.size_bytes(), applied.size_bytes);
    }

    #[test]
    fn test_store_reconfigure_ttl_only_keeps_entries() {
        let mut store = CacheStore::new(1_000, 300);
        store.put("a", blob(100), 60);

        let applied = store.reconfigure(None, Some(10));

        assert_eq!(applied.evicted, 0);
        assert_eq!(applied.max_size_bytes, 1_000);
        assert_eq!(applied.default_ttl_secs, 10);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_set_max_size_grow_evicts_nothing() {
        let mut store = CacheStore::new(300, 300);
        store.put("a", blob(100), 60);

        assert_eq!(store.set_max_size(10_000), 0);
        assert_eq!(store.max_size_bytes(), 10_000);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_sweep_expired() {
        let (mut store, clock) = store_with_clock(1024);

        store.put("short", blob(20), 1);
        store.put("long", blob(20), 10);

        clock.advance_secs(1);

        assert_eq!(store.sweep_expired(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), 20);
        assert_eq!(store.stats().evictions, 1);
        assert!(store.get("long").is_some());
    }

    #[test]
    fn test_store_sweep_nothing_due() {
        let (mut store, _clock) = store_with_clock(1024);
        store.put("key1", blob(20), 10);

        assert_eq!(store.sweep_expired(), 0);
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(1024, 300);

        store.put("key1", blob(20), 60);
        store.get("key1"); // hit
        store.get("key1"); // hit
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.size_bytes, 20);
        assert_eq!(stats.max_size_bytes, 1024);
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(store.hit_count("key1"), Some(3));
    }

    #[test]
    fn test_store_stats_is_a_snapshot() {
        let mut store = CacheStore::new(1024, 300);

        let before = store.stats();
        store.put("key1", blob(20), 60);
        store.get("key1");

        assert_eq!(before.hits, 0);
        assert_eq!(before.size, 0);
    }

    #[test]
    fn test_store_reset_stats() {
        let mut store = CacheStore::new(200, 300);

        store.put("a", blob(100), 60);
        store.put("b", blob(100), 60);
        store.put("c", blob(100), 60);
        store.get("c");
        store.get("a");

        let stats = store.reset_stats();

        assert_eq!(stats, store.stats());
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.size, 2);
        assert_eq!(stats.max_size_observed, 2);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_store_max_size_observed() {
        let mut store = CacheStore::new(1024, 300);

        store.put("a", blob(20), 60);
        store.put("b", blob(20), 60);
        store.put("c", blob(20), 60);
        store.invalidate("a");
        store.invalidate("b");

        let stats = store.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.max_size_observed, 3);
    }
}
