//! API Module
//!
//! HTTP handlers and routing for inspecting and tuning the cache at runtime.
//!
//! # Endpoints
//! - `PUT /set` - Store a payload
//! - `GET /get/:key` - Retrieve a payload by key
//! - `DELETE /del/:key` - Invalidate a key
//! - `POST /invalidate` - Invalidate keys by pattern
//! - `POST /clear` - Drop every entry
//! - `GET /stats`, `POST /stats/reset` - Cache statistics
//! - `PUT /config` - Runtime configuration
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
