//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Reads only discover expiry for keys someone asks for again; the sweep is
//! what reclaims the rest. The task holds a weak reference to the store and
//! exits as soon as either its handle cancels it or the last cache handle is
//! dropped, so it never takes the lock after shutdown.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::SharedCache;

const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Sweeper Handle ==
/// Owns the running sweep task.
///
/// Dropping the handle cancels the task; call
/// [`shutdown`](SweeperHandle::shutdown) to also wait for it to finish.
#[derive(Debug)]
pub struct SweeperHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Cancels the task and waits until it has stopped.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "TTL sweep task ended abnormally");
            }
        }
        info!("TTL sweep task stopped");
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawns a background task that sweeps expired entries from `cache` every
/// `interval`.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(50 * 1024 * 1024, 300);
/// let sweeper = spawn_sweeper(&cache, Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.shutdown().await;
/// ```
pub fn spawn_sweeper(cache: &SharedCache, interval: Duration) -> SweeperHandle {
    let interval = interval.max(MIN_SWEEP_INTERVAL);
    let store = cache.downgrade();
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();

    let task = tokio::spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            "Starting TTL sweep task"
        );

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => {
                    debug!("TTL sweep task cancelled");
                    break;
                }
                _ = ticker.tick() => {}
            }

            let Some(store) = store.upgrade() else {
                debug!("Cache dropped, stopping TTL sweep task");
                break;
            };
            let (removed, remaining) = {
                let mut guard = store.lock();
                let removed = guard.sweep_expired();
                (removed, guard.len())
            };
            drop(store);

            if removed > 0 {
                info!(removed, remaining, "TTL sweep removed expired entries");
            } else {
                debug!(remaining, "TTL sweep found no expired entries");
            }
        }
    });

    SweeperHandle {
        cancel,
        task: Some(task),
    }
}
