//! Lifecycle sweeper: the only thing that bounds in-memory growth.
//!
//! A fixed-interval timer checks the business-hours predicate; while
//! the bar is closed, every tick clears both stores. There is no
//! per-session or per-message expiry anywhere else. Connections that
//! outlive closing time are left open (and desynchronized) on purpose.

use std::sync::Arc;
use std::time::Duration;

use meimei_shared::business_hours;
use tokio::task::JoinHandle;

use crate::usecase::CloseBarUseCase;

/// Spawn the sweeper against the real business-hours predicate.
pub fn spawn(close_bar_usecase: Arc<CloseBarUseCase>, interval: Duration) -> JoinHandle<()> {
    spawn_with(close_bar_usecase, interval, business_hours::is_open)
}

/// Spawn the sweeper with an injected open/closed predicate.
pub fn spawn_with<F>(
    close_bar_usecase: Arc<CloseBarUseCase>,
    interval: Duration,
    is_open: F,
) -> JoinHandle<()>
where
    F: Fn() -> bool + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if !is_open() {
                tracing::info!("Outside business hours, sweeping all state");
                close_bar_usecase.execute().await;
            }
        }
    })
}
