use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::FutureExt;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::config::DEFAULT_TICK_INTERVAL;
use crate::models::FundsRaisedSnapshot;
use crate::traits::FundsEventHandler;
use crate::tracker::funds_tracker::FundsTracker;

/// Handle to a running tracking loop.
///
/// Dropping the handle leaves the loop running; call [`TrackingHandle::stop`].
#[derive(Debug)]
pub struct TrackingHandle {
    task: JoinHandle<()>,
    interval: Duration,
}

impl TrackingHandle {
    /// Stop future ticks. Ticks already in flight still deliver their snapshot.
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

struct CallbackHandler<F> {
    callback: F,
}

#[async_trait]
impl<F> FundsEventHandler for CallbackHandler<F>
where
    F: Fn(FundsRaisedSnapshot) + Send + Sync + 'static,
{
    async fn handle_snapshot(&self, snapshot: FundsRaisedSnapshot) {
        (self.callback)(snapshot)
    }
}

/// Start polling with a plain callback
pub fn start_tracking<F>(
    tracker: Arc<FundsTracker>,
    interval: Duration,
    callback: F,
) -> TrackingHandle
where
    F: Fn(FundsRaisedSnapshot) + Send + Sync + 'static,
{
    start_tracking_with_handler(tracker, interval, Arc::new(CallbackHandler { callback }))
}

/// Start polling: one tick immediately, then one per `interval`.
///
/// Every tick runs in its own task, so a slow aggregation never delays the
/// next tick and consecutive ticks may overlap.
pub fn start_tracking_with_handler(
    tracker: Arc<FundsTracker>,
    interval: Duration,
    handler: Arc<dyn FundsEventHandler>,
) -> TrackingHandle {
    let interval = if interval.is_zero() {
        warn!(
            "Tracking interval of 0ms requested, using {}ms",
            DEFAULT_TICK_INTERVAL.as_millis()
        );
        DEFAULT_TICK_INTERVAL
    } else {
        interval
    };

    info!(
        "Starting funds tracking for @{} with interval: {}ms",
        tracker.twitter_username(),
        interval.as_millis()
    );

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // After a stall, fire once and resume the fixed cadence from there
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;

        loop {
            ticker.tick().await;
            debug!("Tracking tick {}", tick);
            tick += 1;

            let tracker = tracker.clone();
            let handler = handler.clone();
            tokio::spawn(async move {
                run_tick(&tracker, handler.as_ref()).await;
            });
        }
    });

    TrackingHandle { task, interval }
}

async fn run_tick(tracker: &FundsTracker, handler: &dyn FundsEventHandler) {
    let snapshot = match AssertUnwindSafe(tracker.funds_raised()).catch_unwind().await {
        Ok(snapshot) => snapshot,
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("Tracking error: {}", message);
            FundsRaisedSnapshot::errored(message)
        }
    };

    handler.handle_snapshot(snapshot).await;
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "tracking task panicked".to_string()
    }
}
