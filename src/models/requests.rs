//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::Payload;

/// Maximum accepted key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Checks a cache key taken from a body or a path segment.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: JSON object to store
/// - `ttl`: Optional TTL in seconds; missing or non-positive uses the default
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The payload to store
    pub value: Payload,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }

    /// TTL handed to the store; 0 selects the default.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.unwrap_or(0)
    }
}

/// Request body for pattern invalidation (POST /invalidate)
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidatePatternRequest {
    /// Case-insensitive substring matched against every key
    pub pattern: String,
}

impl InvalidatePatternRequest {
    pub fn validate(&self) -> Option<String> {
        if self.pattern.is_empty() {
            return Some("Pattern cannot be empty; use /clear to drop everything".to_string());
        }
        None
    }
}

/// Request body for runtime configuration (PUT /config)
///
/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigRequest {
    /// New byte budget
    #[serde(default)]
    pub max_size_bytes: Option<u64>,
    /// New default TTL in seconds
    #[serde(default)]
    pub default_ttl: Option<u64>,
}

impl ConfigRequest {
    pub fn validate(&self) -> Option<String> {
        if self.max_size_bytes == Some(0) {
            return Some("max_size_bytes must be greater than 0".to_string());
        }
        if self.default_ttl == Some(0) {
            return Some("default_ttl must be greater than 0".to_string());
        }
        None
    }
}
