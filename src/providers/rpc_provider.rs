use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use tracing::{debug, instrument, warn};

use crate::error::{status_error, TrackerError};
use crate::traits::balance_provider::BalanceProvider;
use crate::utils::helper::parse_pubkey;

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    result: Option<RpcBalanceResult>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcBalanceResult {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Extract lamports from a `getBalance` reply.
///
/// An explicit JSON-RPC error is propagated. A reply with neither `result`
/// nor `error` counts as an empty account and yields zero.
pub(crate) fn lamports_from_response(response: RpcResponse) -> Result<u64, TrackerError> {
    if let Some(error) = response.error {
        return Err(TrackerError::Rpc(format!("{} (code {})", error.message, error.code)));
    }
    match response.result {
        Some(result) => Ok(result.value),
        None => {
            warn!("getBalance reply carried no result, treating balance as zero");
            Ok(0)
        }
    }
}

/// Balance lookups through a raw JSON-RPC POST
pub struct JsonRpcBalanceProvider {
    http_client: Client,
    rpc_url: String,
}

impl JsonRpcBalanceProvider {
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self, TrackerError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, rpc_url))
    }

    pub fn with_client(http_client: Client, rpc_url: impl Into<String>) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.into(),
        }
    }
}

#[async_trait]
impl BalanceProvider for JsonRpcBalanceProvider {
    #[instrument(skip(self))]
    async fn fetch_lamports(&self, wallet: &str) -> Result<u64, TrackerError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [wallet],
        });

        let response = self.http_client.post(&self.rpc_url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let reply: RpcResponse = response.json().await?;
        let lamports = lamports_from_response(reply)?;
        debug!("Wallet {} holds {} lamports", wallet, lamports);
        Ok(lamports)
    }
}

/// Balance lookups through the `solana_client` RPC client
pub struct SolanaRpcBalanceProvider {
    rpc_client: Arc<RpcClient>,
}

impl SolanaRpcBalanceProvider {
    /// Create a new RPC balance provider
    pub fn new(rpc_url: String, timeout: Duration) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            rpc_url,
            timeout,
            CommitmentConfig { commitment: CommitmentLevel::Confirmed },
        );

        Self {
            rpc_client: Arc::new(client),
        }
    }
}

#[async_trait]
impl BalanceProvider for SolanaRpcBalanceProvider {
    #[instrument(skip(self))]
    async fn fetch_lamports(&self, wallet: &str) -> Result<u64, TrackerError> {
        let pubkey = parse_pubkey(wallet)?;
        self.rpc_client
            .get_balance(&pubkey)
            .await
            .map_err(|e| TrackerError::Rpc(e.to_string()))
    }
}
