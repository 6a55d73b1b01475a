use async_trait::async_trait;

use crate::error::TrackerError;

/// Fee-sharing launch API (bags.fm or a stand-in)
#[async_trait]
pub trait FeeShareProvider: Send + Sync {
    /// Wallet address designated as fee recipient for a Twitter handle
    async fn wallet_for_twitter(&self, username: &str) -> Result<String, TrackerError>;

    /// Lifetime fees of a token launch, in lamports
    async fn lifetime_fees(&self, token_mint: &str) -> Result<u64, TrackerError>;

    /// Claimable fee transactions for a fee claimer, returned as raw JSON
    async fn claim_transactions(&self, fee_claimer: &str)
        -> Result<serde_json::Value, TrackerError>;
}
