//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the life of a cache.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries nobody reads again

mod sweeper;

pub use sweeper::{spawn_sweeper, SweeperHandle};
