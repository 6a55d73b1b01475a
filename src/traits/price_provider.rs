use async_trait::async_trait;

use crate::error::TrackerError;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Get SOL price in USD
    async fn get_sol_price(&self) -> Result<f64, TrackerError>;
}
