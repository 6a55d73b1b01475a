use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::config::{RpcBackend, TrackerConfig};
use crate::Result;
use crate::models::{FundsRaisedSnapshot, HealthStatus, LifetimeFees, WalletBalance};
use crate::providers::{
    BagsApiClient, CoinGeckoPriceProvider, JsonRpcBalanceProvider, SolanaRpcBalanceProvider,
};
use crate::traits::{BalanceProvider, FeeShareProvider, FundsEventHandler, PriceProvider};
use crate::tracker::poller::{self, TrackingHandle};
use crate::tracker::wallet_resolver::WalletResolver;

/// Application context for funds tracking.
///
/// Owns the providers and the wallet cache; build one at startup and share it
/// behind an `Arc`.
pub struct FundsTracker {
    resolver: WalletResolver,
    fee_share: Arc<dyn FeeShareProvider>,
    balance_provider: Arc<dyn BalanceProvider>,
    price_provider: Arc<dyn PriceProvider>,
}

impl FundsTracker {
    /// Create a new funds tracker
    pub fn new(
        twitter_username: impl Into<String>,
        cache_ttl: Duration,
        fee_share: Arc<dyn FeeShareProvider>,
        balance_provider: Arc<dyn BalanceProvider>,
        price_provider: Arc<dyn PriceProvider>,
    ) -> Self {
        Self {
            resolver: WalletResolver::new(fee_share.clone(), twitter_username, cache_ttl),
            fee_share,
            balance_provider,
            price_provider,
        }
    }

    /// Wire up the network providers described by `config`
    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        let http_client = Client::builder().timeout(config.request_timeout).build()?;

        let fee_share: Arc<dyn FeeShareProvider> = Arc::new(BagsApiClient::with_client(
            http_client.clone(),
            &config.bags_api_url,
            &config.bags_api_key,
        ));

        let balance_provider: Arc<dyn BalanceProvider> = match config.rpc_backend {
            RpcBackend::JsonRpc => Arc::new(JsonRpcBalanceProvider::with_client(
                http_client.clone(),
                &config.rpc_url,
            )),
            RpcBackend::SolanaClient => Arc::new(SolanaRpcBalanceProvider::new(
                config.rpc_url.clone(),
                config.request_timeout,
            )),
        };

        let price_provider: Arc<dyn PriceProvider> = Arc::new(CoinGeckoPriceProvider::with_client(
            http_client,
            &config.price_api_url,
            &config.price_token_id,
        ));

        info!("Tracking fee-share wallet for @{}", config.twitter_username);
        info!("Fee-share API: {}", config.bags_api_url);
        info!("RPC URL: {} ({:?})", config.rpc_url, config.rpc_backend);

        Ok(Self::new(
            config.twitter_username.clone(),
            config.cache_ttl,
            fee_share,
            balance_provider,
            price_provider,
        ))
    }

    pub fn twitter_username(&self) -> &str {
        self.resolver.twitter_username()
    }

    /// Fee-sharing wallet for the configured handle (cached)
    pub async fn wallet(&self) -> Result<String> {
        self.resolver.resolve().await
    }

    /// Native balance of the fee-sharing wallet
    #[instrument(skip(self))]
    pub async fn wallet_balance(&self) -> Result<WalletBalance> {
        let wallet = self.wallet().await?;
        let lamports = self.balance_provider.fetch_lamports(&wallet).await?;
        let balance = WalletBalance::from_lamports(wallet, lamports);
        debug!("Wallet balance: {}", balance.formatted_sol());
        Ok(balance)
    }

    /// SOL price in USD from the configured price feed
    pub async fn sol_price(&self) -> Result<f64> {
        self.price_provider.get_sol_price().await
    }

    /// Lifetime fees generated by a token launch
    #[instrument(skip(self))]
    pub async fn lifetime_fees(&self, token_mint: &str) -> Result<LifetimeFees> {
        match self.fee_share.lifetime_fees(token_mint).await {
            Ok(lamports) => Ok(LifetimeFees::from_lamports(token_mint, lamports)),
            Err(e) => {
                error!("Error fetching token fees for {}: {}", token_mint, e);
                Err(e)
            }
        }
    }

    /// Claimable fee transactions for the fee-sharing wallet
    pub async fn claimable_transactions(&self) -> Result<Value> {
        let wallet = self.wallet().await?;
        self.fee_share
            .claim_transactions(&wallet)
            .await
            .inspect_err(|e| error!("Error fetching claimable transactions: {}", e))
    }

    /// Check API connectivity by resolving the wallet
    pub async fn health_check(&self) -> HealthStatus {
        match self.wallet().await {
            Ok(wallet) => HealthStatus::healthy(wallet),
            Err(e) => HealthStatus::unhealthy(e.to_string()),
        }
    }

    /// Funds raised so far. Never fails: errors produce a fallback snapshot.
    pub async fn funds_raised(&self) -> FundsRaisedSnapshot {
        match self.try_funds_raised().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Error getting funds raised data: {}", e);
                FundsRaisedSnapshot::fallback(e.to_string())
            }
        }
    }

    async fn try_funds_raised(&self) -> Result<FundsRaisedSnapshot> {
        let (balance, price) =
            tokio::try_join!(self.wallet_balance(), self.price_provider.get_sol_price())?;

        let usd = balance.sol * price;
        Ok(FundsRaisedSnapshot::live(balance.wallet, balance.sol, usd))
    }

    /// Poll `funds_raised` every `interval`, handing each snapshot to `callback`
    pub fn start_tracking<F>(self: &Arc<Self>, interval: Duration, callback: F) -> TrackingHandle
    where
        F: Fn(FundsRaisedSnapshot) + Send + Sync + 'static,
    {
        poller::start_tracking(self.clone(), interval, callback)
    }

    /// Poll `funds_raised` every `interval`, handing each snapshot to `handler`
    pub fn start_tracking_with_handler(
        self: &Arc<Self>,
        interval: Duration,
        handler: Arc<dyn FundsEventHandler>,
    ) -> TrackingHandle {
        poller::start_tracking_with_handler(self.clone(), interval, handler)
    }
}
