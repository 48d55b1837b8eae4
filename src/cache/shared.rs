//! Shared Cache Module
//!
//! Thread-safe handle over a single [`CacheStore`]. Every operation takes one
//! exclusive lock covering the table, the byte counter and the statistics,
//! so each caller observes the store between operations, never inside one.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, Clock, Payload, Reconfigured};

// == Shared Cache ==
/// Cloneable, thread-safe cache handle.
///
/// Clones refer to the same store. The store lives as long as at least one
/// handle does.
#[derive(Debug, Clone)]
pub struct SharedCache {
    store: Arc<Mutex<CacheStore>>,
}

impl SharedCache {
    /// Creates a handle over a store with the given byte budget and default
    /// TTL.
    pub fn new(max_size_bytes: u64, default_ttl_secs: u64) -> Self {
        Self::from_store(CacheStore::new(max_size_bytes, default_ttl_secs))
    }

    /// Creates a handle over a store reading time from `clock`.
    pub fn with_clock(max_size_bytes: u64, default_ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self::from_store(CacheStore::with_clock(
            max_size_bytes,
            default_ttl_secs,
            clock,
        ))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    // == Key/Value Operations ==
    /// See [`CacheStore::get`].
    pub fn get(&self, key: &str) -> Option<Payload> {
        self.store.lock().get(key)
    }

    /// See [`CacheStore::get_with_ttl`].
    pub fn get_with_ttl(&self, key: &str) -> Option<(Payload, u64)> {
        self.store.lock().get_with_ttl(key)
    }

    /// See [`CacheStore::put`].
    pub fn put(&self, key: impl Into<String>, value: Payload, ttl_secs: i64) {
        self.store.lock().put(key, value, ttl_secs);
    }

    /// See [`CacheStore::invalidate`].
    pub fn invalidate(&self, key: &str) -> bool {
        self.store.lock().invalidate(key)
    }

    /// See [`CacheStore::invalidate_pattern`].
    pub fn invalidate_pattern(&self, pattern: &str) -> usize {
        self.store.lock().invalidate_pattern(pattern)
    }

    pub fn clear(&self) {
        self.store.lock().clear();
    }

    // == Configuration ==
    /// See [`CacheStore::set_max_size`].
    pub fn set_max_size(&self, max_size_bytes: u64) -> usize {
        self.store.lock().set_max_size(max_size_bytes)
    }

    pub fn set_max_size_mb(&self, max_size_mb: u64) -> usize {
        self.store.lock().set_max_size_mb(max_size_mb)
    }

    pub fn set_default_ttl(&self, default_ttl_secs: u64) {
        self.store.lock().set_default_ttl(default_ttl_secs);
    }

    /// See [`CacheStore::reconfigure`]. The returned settings are the ones in
    /// effect when the lock was released.
    pub fn reconfigure(
        &self,
        max_size_bytes: Option<u64>,
        default_ttl_secs: Option<u64>,
    ) -> Reconfigured {
        self.store.lock().reconfigure(max_size_bytes, default_ttl_secs)
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.store.lock().max_size_bytes()
    }

    pub fn default_ttl_secs(&self) -> u64 {
        self.store.lock().default_ttl_secs()
    }

    // == Maintenance ==
    /// See [`CacheStore::sweep_expired`].
    pub fn sweep_expired(&self) -> usize {
        self.store.lock().sweep_expired()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Zeroes the counters and returns the snapshot taken under the same
    /// lock.
    pub fn reset_stats(&self) -> CacheStats {
        self.store.lock().reset_stats()
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn size_bytes(&self) -> u64 {
        self.store.lock().size_bytes()
    }

    /// Checks the byte accounting under the lock.
    pub fn verify_size_accounting(&self) -> bool {
        self.store.lock().verify_size_accounting()
    }

    /// Weak reference for background tasks that must not keep the store
    /// alive.
    pub(crate) fn downgrade(&self) -> Weak<Mutex<CacheStore>> {
        Arc::downgrade(&self.store)
    }
}

impl Default for SharedCache {
    fn default() -> Self {
        Self::from_store(CacheStore::default())
    }
}
