//! Lookup Cache - a bounded, TTL-aware, thread-safe cache
//!
//! Sits in front of expensive lookups (chat lists, message pages, settings,
//! search and analytics results). Entries expire after their TTL, the total
//! estimated size stays within a byte budget through LRU eviction, and a
//! background sweep reclaims expired entries nobody reads again.
//!
//! ```ignore
//! use lookup_cache::cache::{keys, SharedCache};
//!
//! let cache = SharedCache::new(50 * 1024 * 1024, 300);
//! let sweeper = lookup_cache::spawn_sweeper(&cache, std::time::Duration::from_secs(60));
//!
//! cache.put(keys::chat_list_key(), chats, 60);
//! if let Some(chats) = cache.get(&keys::chat_list_key()) {
//!     // serve from cache
//! }
//! sweeper.shutdown().await;
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStats, CacheStore, Payload, SharedCache};
pub use config::Config;
pub use tasks::{spawn_sweeper, SweeperHandle};
