//! Fixed-interval status polling

use super::client::DashboardClient;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Polls the status endpoint every `period` until `shutdown` fires.
///
/// The first poll happens one period after start; the initial load is the
/// caller's job. Errors never pause or slow the cadence.
pub fn spawn_status_poller(
    client: DashboardClient,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    // Detached so a slow response never delays the next tick.
                    let client = client.clone();
                    tokio::spawn(async move { client.load_status().await });
                }
            }
        }
    })
}
