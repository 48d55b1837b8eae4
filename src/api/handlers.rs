//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. Each handler makes
//! one call into the shared cache; the lock is never held across an await.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, ClearResponse, ConfigRequest, ConfigResponse, DeleteResponse, GetResponse,
    HealthResponse, InvalidatePatternRequest, InvalidateResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache handle
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around the given cache handle.
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SharedCache::new(config.max_size_bytes(), config.default_ttl))
    }
}

/// Handler for PUT /set
///
/// Stores a payload in the cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl_secs();
    state.cache.put(req.key.clone(), req.value, ttl);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a payload and its remaining TTL by key. Absent and expired
/// keys are both 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    if let Some(error_msg) = validate_key(&key) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    match state.cache.get_with_ttl(&key) {
        Some((value, ttl_remaining_ms)) => {
            Ok(Json(GetResponse::new(key, value, ttl_remaining_ms)))
        }
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if let Some(error_msg) = validate_key(&key) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let removed = state.cache.invalidate(&key);

    Ok(Json(DeleteResponse::new(key, removed)))
}

/// Handler for POST /invalidate
///
/// Drops every key containing the pattern, ignoring case.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidatePatternRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let removed = state.cache.invalidate_pattern(&req.pattern);
    info!(pattern = %req.pattern, removed, "Invalidated cache entries by pattern");

    Ok(Json(InvalidateResponse {
        pattern: req.pattern,
        removed,
    }))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear();
    info!("Cache cleared");
    Json(ClearResponse::cleared())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for POST /stats/reset
///
/// Zeroes hits, misses and evictions and returns the resulting snapshot.
pub async fn reset_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.reset_stats().into())
}

/// Handler for PUT /config
///
/// Applies a new byte budget and/or default TTL. Shrinking the budget
/// evicts before the response is sent.
pub async fn config_handler(
    State(state): State<AppState>,
    Json(req): Json<ConfigRequest>,
) -> Result<Json<ConfigResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let applied = state.cache.reconfigure(req.max_size_bytes, req.default_ttl);
    info!(
        max_size_bytes = applied.max_size_bytes,
        default_ttl = applied.default_ttl_secs,
        evicted = applied.evicted,
        "Cache configuration updated"
    );

    Ok(Json(ConfigResponse {
        max_size_bytes: applied.max_size_bytes,
        default_ttl: applied.default_ttl_secs,
        size_bytes: applied.size_bytes,
        evicted: applied.evicted,
    }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
