//! Configuration Module
//!
//! Handles loading and managing cache and server configuration from
//! environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache byte budget in megabytes
    pub max_size_mb: u64,
    /// Default TTL in seconds for entries stored without one
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// TTL sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_SIZE_MB` - Cache byte budget in megabytes (default: 50)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size_mb: env_or("MAX_SIZE_MB", defaults.max_size_mb),
            default_ttl: env_or("DEFAULT_TTL", defaults.default_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }

    /// Rejects settings the cache cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_size_mb == 0 {
            return Err(CacheError::Config("MAX_SIZE_MB must be greater than 0".to_string()));
        }
        if self.max_size_mb.checked_mul(BYTES_PER_MB).is_none() {
            return Err(CacheError::Config(format!(
                "MAX_SIZE_MB is too large: {}",
                self.max_size_mb
            )));
        }
        if self.default_ttl == 0 {
            return Err(CacheError::Config("DEFAULT_TTL must be greater than 0".to_string()));
        }
        if self.sweep_interval == 0 {
            return Err(CacheError::Config(
                "SWEEP_INTERVAL must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Byte budget derived from `max_size_mb`.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size_mb: 50,
            default_ttl: 300,
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
