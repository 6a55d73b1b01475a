use std::sync::Arc;

use fee_share_tracker::{
  ConsoleEventHandler, FundsEventHandler, FundsTracker, TrackerConfig,
};
use tracing::info;
use tracing::level_filters::LevelFilter;

fn main() -> anyhow::Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_max_level(LevelFilter::INFO)
    .with_file(true)
    .with_line_number(true)
    .init();

  let config = TrackerConfig::from_env()?;

  tokio::runtime::Runtime::new()?.block_on(async {
    info!("Initializing funds tracker...");

    let tracker = Arc::new(FundsTracker::from_config(&config)?);

    let health = tracker.health_check().await;
    if health.healthy {
      info!(
        "Fee-share API reachable, wallet: {}",
        health.wallet.as_deref().unwrap_or_default()
      );
    } else {
      info!(
        "Fee-share API not ready yet: {}",
        health.error.as_deref().unwrap_or("unknown error")
      );
    }

    let handler: Arc<dyn FundsEventHandler> = Arc::new(ConsoleEventHandler::new());
    let handle = tracker.start_tracking_with_handler(config.tick_interval, handler);

    info!("Funds tracker is running. Press Ctrl+C to stop.");

    // Keep the program running
    tokio::signal::ctrl_c().await?;

    handle.stop();
    info!("Shutting down...");

    Ok(())
  })
}
