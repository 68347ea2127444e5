//! Fixed-interval refresh loops
//!
//! The admin pages keep their order and user lists fresh by polling on
//! a fixed interval. A failed refresh is swallowed and retried at the
//! next tick; stopping the poller clears the timer and drops any
//! in-flight request with it.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Handle for a spawned refresh loop.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn a loop that runs `refresh` once per `period`, starting
    /// immediately.
    pub fn spawn<F, Fut, E>(period: Duration, mut refresh: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send,
        E: std::fmt::Display,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(e) = refresh().await {
                    tracing::warn!("Refresh failed, retrying next tick: {}", e);
                }
            }
        });

        Self { handle }
    }

    /// Stop the loop.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
