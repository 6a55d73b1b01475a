use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::error::TrackerError;
use crate::Result;
use crate::traits::fee_share_provider::FeeShareProvider;
use crate::tracker::wallet_cache::WalletCache;

/// Resolves the configured Twitter handle to its fee-sharing wallet
pub struct WalletResolver {
    provider: Arc<dyn FeeShareProvider>,
    twitter_username: String,
    cache: WalletCache,
}

impl WalletResolver {
    pub fn new(
        provider: Arc<dyn FeeShareProvider>,
        twitter_username: impl Into<String>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            twitter_username: twitter_username.into(),
            cache: WalletCache::new(cache_ttl),
        }
    }

    pub fn twitter_username(&self) -> &str {
        &self.twitter_username
    }

    pub fn cache(&self) -> &WalletCache {
        &self.cache
    }

    /// Wallet address for the handle, served from cache while fresh
    pub async fn resolve(&self) -> Result<String> {
        if let Some(wallet) = self.cache.get(&self.twitter_username) {
            debug!("Wallet cache hit for @{}", self.twitter_username);
            return Ok(wallet);
        }

        match self.provider.wallet_for_twitter(&self.twitter_username).await {
            Ok(wallet) => {
                info!("Fee-share wallet for @{}: {}", self.twitter_username, wallet);
                self.cache.insert(&self.twitter_username, wallet.clone());
                Ok(wallet)
            }
            Err(e) => {
                error!("Error fetching wallet for @{}: {}", self.twitter_username, e);
                Err(TrackerError::lookup(&self.twitter_username, e))
            }
        }
    }
}
