use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::funds::{FundsRaisedSnapshot, SnapshotSource};
use crate::traits::event_handler::FundsEventHandler;
use crate::utils::helper::format_pubkey;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FundsEventHandler for ConsoleEventHandler {
    async fn handle_snapshot(&self, snapshot: FundsRaisedSnapshot) {
        let timestamp = snapshot.last_updated.format("%Y-%m-%d %H:%M:%S UTC");

        match snapshot.source {
            SnapshotSource::BagsFm => {
                let wallet = snapshot.wallet.as_deref().map(format_pubkey).unwrap_or_default();
                info!(
                    "[{}] Funds raised: {} (◎{:.4}, ${:.2}) wallet {}",
                    timestamp, snapshot.formatted, snapshot.sol, snapshot.usd, wallet
                );
            }
            SnapshotSource::Fallback | SnapshotSource::Error => {
                warn!(
                    "[{}] Funds raised unavailable ({}): {}",
                    timestamp,
                    snapshot.source,
                    snapshot.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }
}
