mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{tracker, BalanceBehavior, MockBalance, MockFeeShare, MockPrice, SnapshotLog, WALLET};
use fee_share_tracker::SnapshotSource;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn fires_immediately_then_every_interval_until_stopped() {
    let tracker = tracker(
        Arc::new(MockFeeShare::with_wallet(WALLET)),
        Arc::new(MockBalance::new(BalanceBehavior::Lamports(2_000_000_000))),
        Arc::new(MockPrice::fixed(100.0)),
    );
    let log = SnapshotLog::default();

    let handle = tracker.start_tracking(Duration::from_millis(1000), log.callback());
    assert_eq!(handle.interval(), Duration::from_millis(1000));

    sleep(Duration::from_millis(10)).await;
    assert_eq!(log.len(), 1, "tick 0 fires immediately");

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(log.len(), 2);

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(log.len(), 3);

    handle.stop();
    sleep(Duration::from_millis(5000)).await;
    assert_eq!(log.len(), 3);
    assert!(!handle.is_running());

    for snapshot in log.all() {
        assert_eq!(snapshot.source, SnapshotSource::BagsFm);
        assert_eq!(snapshot.formatted, "$200");
    }
}

#[tokio::test(start_paused = true)]
async fn slow_ticks_overlap_and_finish_after_stop() {
    let balance = Arc::new(
        MockBalance::new(BalanceBehavior::Lamports(1_000_000_000))
            .with_delay(Duration::from_millis(2500)),
    );
    let tracker = tracker(
        Arc::new(MockFeeShare::with_wallet(WALLET)),
        balance.clone(),
        Arc::new(MockPrice::fixed(1.0)),
    );
    let log = SnapshotLog::default();

    let handle = tracker.start_tracking(Duration::from_millis(1000), log.callback());

    // Ticks at 0, 1000, 2000, 3000 started; those at 0 and 1000 have finished
    sleep(Duration::from_millis(3600)).await;
    assert_eq!(balance.calls(), 4);
    assert_eq!(log.len(), 2);

    handle.stop();
    sleep(Duration::from_millis(10_000)).await;

    assert_eq!(balance.calls(), 4);
    assert_eq!(log.len(), 4, "in-flight ticks still deliver");
}

#[tokio::test(start_paused = true)]
async fn failing_aggregation_delivers_fallback_each_tick() {
    let tracker = tracker(
        Arc::new(MockFeeShare::with_wallet(WALLET)),
        Arc::new(MockBalance::new(BalanceBehavior::Fail)),
        Arc::new(MockPrice::fixed(1.0)),
    );
    let log = SnapshotLog::default();

    let handle = tracker.start_tracking(Duration::from_millis(500), log.callback());
    sleep(Duration::from_millis(1200)).await;
    handle.stop();

    let snapshots = log.all();
    assert_eq!(snapshots.len(), 3);
    assert!(snapshots.iter().all(|s| s.source == SnapshotSource::Fallback));
}

#[tokio::test(start_paused = true)]
async fn panicking_tick_is_reported_as_error_snapshot() {
    let tracker = tracker(
        Arc::new(MockFeeShare::with_wallet(WALLET)),
        Arc::new(MockBalance::new(BalanceBehavior::Panic)),
        Arc::new(MockPrice::fixed(1.0)),
    );
    let log = SnapshotLog::default();

    let handle = tracker.start_tracking(Duration::from_millis(1000), log.callback());
    sleep(Duration::from_millis(10)).await;
    handle.stop();

    let snapshots = log.all();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].source, SnapshotSource::Error);
    assert_eq!(snapshots[0].error.as_deref(), Some("rpc client exploded"));
    assert_eq!(snapshots[0].formatted, "$0");
}

#[tokio::test(start_paused = true)]
async fn zero_interval_uses_default() {
    let tracker = tracker(
        Arc::new(MockFeeShare::with_wallet(WALLET)),
        Arc::new(MockBalance::new(BalanceBehavior::Lamports(0))),
        Arc::new(MockPrice::fixed(1.0)),
    );
    let log = SnapshotLog::default();

    let handle = tracker.start_tracking(Duration::ZERO, log.callback());
    assert_eq!(handle.interval(), Duration::from_millis(60_000));

    sleep(Duration::from_millis(59_000)).await;
    assert_eq!(log.len(), 1);
    handle.stop();
}

#[tokio::test(start_paused = true)]
async fn stalled_clock_fires_one_catch_up_tick() {
    let tracker = tracker(
        Arc::new(MockFeeShare::with_wallet(WALLET)),
        Arc::new(MockBalance::new(BalanceBehavior::Lamports(0))),
        Arc::new(MockPrice::fixed(1.0)),
    );
    let log = SnapshotLog::default();

    let handle = tracker.start_tracking(Duration::from_millis(1000), log.callback());
    sleep(Duration::from_millis(10)).await;
    assert_eq!(log.len(), 1);

    // Jump past five ticks at once; they must not burst
    tokio::time::advance(Duration::from_millis(5000)).await;
    sleep(Duration::from_millis(10)).await;
    assert_eq!(log.len(), 2);

    // Cadence resumes one interval after the catch-up tick
    sleep(Duration::from_millis(1100)).await;
    assert_eq!(log.len(), 3);
    handle.stop();
}
