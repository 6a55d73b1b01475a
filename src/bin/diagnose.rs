//! Connectivity check for the fee-share integration.
//!
//! Resolves the configured handle's wallet, then reads its balance and the
//! SOL price, logging a pass/fail line for each step.

use fee_share_tracker::{FundsTracker, TrackerConfig, WalletBalance};
use tracing::info;
use tracing::level_filters::LevelFilter;

async fn check_wallet_lookup(tracker: &FundsTracker) -> Option<String> {
  info!("🔍 Testing @{} wallet lookup...", tracker.twitter_username());

  match tracker.wallet().await {
    Ok(wallet) => {
      info!("✅ Fee-share wallet address: {}", wallet);
      Some(wallet)
    }
    Err(e) => {
      info!("❌ Wallet lookup failed: {}", e);
      None
    }
  }
}

async fn check_balance_and_price(tracker: &FundsTracker) {
  info!("");
  info!("💰 Testing wallet balance lookup...");

  let balance: WalletBalance = match tracker.wallet_balance().await {
    Ok(balance) => balance,
    Err(e) => {
      info!("❌ Balance lookup error: {}", e);
      return;
    }
  };
  info!(
    "✅ Wallet balance: {} lamports ({:.4} SOL)",
    balance.lamports, balance.sol
  );

  match tracker.sol_price().await {
    Ok(price) if price > 0.0 => {
      info!("💵 SOL price: ${}", price);
      info!("💰 USD value: ${:.2}", balance.sol * price);
    }
    Ok(_) => info!("❌ SOL price unavailable (feed returned 0)"),
    Err(e) => info!("❌ SOL price lookup error: {}", e),
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_target(false)
    .with_max_level(LevelFilter::INFO)
    .init();

  let config = TrackerConfig::from_env()?;
  let tracker = FundsTracker::from_config(&config)?;

  info!("🚀 Starting bags.fm API integration check");
  info!("{}", "=".repeat(50));

  let wallet = check_wallet_lookup(&tracker).await;
  if wallet.is_some() {
    check_balance_and_price(&tracker).await;
  } else {
    info!("⚠️ No wallet address to test balance");
  }

  info!("");
  info!("{}", "=".repeat(50));
  info!("✅ Check completed!");
  info!("");
  info!("📊 Current status:");
  info!("• Twitter account: @{}", tracker.twitter_username());
  info!("• Wallet found: {}", if wallet.is_some() { "YES" } else { "NO" });
  info!(
    "• API connectivity: {}",
    if wallet.is_some() { "WORKING" } else { "NEEDS ATTENTION" }
  );

  if wallet.is_none() {
    info!("");
    info!("⚠️ The account may not be set up for fee sharing yet");
  }

  Ok(())
}
