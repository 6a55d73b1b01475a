use async_trait::async_trait;

use crate::error::TrackerError;

/// Source of native wallet balances
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Fetch the balance of `wallet` in lamports
    async fn fetch_lamports(&self, wallet: &str) -> Result<u64, TrackerError>;
}
