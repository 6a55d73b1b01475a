//! Runtime configuration, read from the environment (and `.env` if present).

use std::str::FromStr;
use std::time::Duration;

use crate::error::TrackerError;

pub const DEFAULT_BAGS_API_URL: &str = "https://public-api-v2.bags.fm/api/v1";
pub const DEFAULT_TWITTER_USERNAME: &str = "knowyourmeme";
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_PRICE_TOKEN_ID: &str = "solana";

/// Wallet cache lifetime (5 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(300_000);
/// Poll interval for continuous tracking (1 minute)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(60_000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Which implementation serves `getBalance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RpcBackend {
    /// Raw JSON-RPC POST over reqwest
    #[default]
    JsonRpc,
    /// `solana_client` nonblocking RpcClient
    SolanaClient,
}

impl FromStr for RpcBackend {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json-rpc" | "jsonrpc" | "json" => Ok(RpcBackend::JsonRpc),
            "solana-client" | "solana" => Ok(RpcBackend::SolanaClient),
            other => Err(TrackerError::Config(format!(
                "unknown RPC_BACKEND '{}', expected json-rpc or solana-client",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub bags_api_url: String,
    pub bags_api_key: String,
    pub twitter_username: String,
    pub rpc_url: String,
    pub rpc_backend: RpcBackend,
    pub price_api_url: String,
    pub price_token_id: String,
    pub cache_ttl: Duration,
    pub tick_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bags_api_url: DEFAULT_BAGS_API_URL.to_string(),
            bags_api_key: String::new(),
            twitter_username: DEFAULT_TWITTER_USERNAME.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            rpc_backend: RpcBackend::default(),
            price_api_url: DEFAULT_PRICE_API_URL.to_string(),
            price_token_id: DEFAULT_PRICE_TOKEN_ID.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            tick_interval: DEFAULT_TICK_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl TrackerConfig {
    /// Load `.env` (if any) and build the config from process environment
    pub fn from_env() -> Result<Self, TrackerError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TrackerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bags_api_key = lookup("BAGS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TrackerError::Config("BAGS_API_KEY is not set".to_string()))?;

        let rpc_backend = match lookup("RPC_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.rpc_backend,
        };

        Ok(Self {
            bags_api_url: lookup("BAGS_API_URL").unwrap_or(defaults.bags_api_url),
            bags_api_key,
            twitter_username: lookup("TWITTER_USERNAME")
                .map(|handle| handle.trim_start_matches('@').to_string())
                .unwrap_or(defaults.twitter_username),
            rpc_url: lookup("SOLANA_RPC_URL").unwrap_or(defaults.rpc_url),
            rpc_backend,
            price_api_url: lookup("PRICE_API_URL").unwrap_or(defaults.price_api_url),
            price_token_id: lookup("PRICE_TOKEN_ID").unwrap_or(defaults.price_token_id),
            cache_ttl: millis_var(&lookup, "CACHE_TTL_MS")?.unwrap_or(defaults.cache_ttl),
            tick_interval: millis_var(&lookup, "TICK_INTERVAL_MS")?
                .unwrap_or(defaults.tick_interval),
            request_timeout: millis_var(&lookup, "REQUEST_TIMEOUT_MS")?
                .unwrap_or(defaults.request_timeout),
        })
    }
}

fn millis_var<F>(lookup: &F, key: &str) -> Result<Option<Duration>, TrackerError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|e| TrackerError::Config(format!("{} must be milliseconds: {}", key, e))),
        None => Ok(None),
    }
}
