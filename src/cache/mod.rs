//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, LRU eviction and a byte
//! budget measured by estimated payload size.

mod clock;
mod entry;
pub mod keys;
mod lru;
mod shared;
mod size;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use keys::CacheKey;
pub(crate) use lru::LruTracker;
pub use shared::SharedCache;
pub use size::estimate_size;
pub use stats::CacheStats;
pub use store::{CacheStore, Reconfigured, DEFAULT_MAX_SIZE_BYTES, DEFAULT_TTL_SECS};

/// Structured value stored under a cache key.
pub type Payload = serde_json::Map<String, serde_json::Value>;
