use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{status_error, TrackerError};
use crate::traits::fee_share_provider::FeeShareProvider;

const API_KEY_HEADER: &str = "x-api-key";

/// Envelope every bags.fm endpoint wraps its payload in
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    response: Option<T>,
    error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn into_response(self, what: &str) -> Result<T, TrackerError> {
        match (self.success, self.response) {
            (true, Some(response)) => Ok(response),
            _ => Err(TrackerError::InvalidResponse(match self.error {
                Some(error) => format!("failed to get {}: {}", what, error),
                None => format!("failed to get {} from API response", what),
            })),
        }
    }
}

/// HTTP client for the bags.fm public fee-sharing API
pub struct BagsApiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl BagsApiClient {
    /// Create a client with its own connection pool and request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TrackerError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, base_url, api_key))
    }

    /// Create a client sharing an existing reqwest `Client`
    pub fn with_client(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn checked(response: Response) -> Result<Response, TrackerError> {
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        Ok(response)
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: Response,
        what: &str,
    ) -> Result<T, TrackerError> {
        let envelope: ApiEnvelope<T> = Self::checked(response)?.json().await?;
        envelope.into_response(what)
    }
}

/// Lifetime fees arrive as a decimal string, occasionally as a bare number
fn parse_lamports(value: &Value) -> Result<u64, TrackerError> {
    match value {
        Value::String(raw) => raw.trim().parse::<u64>().map_err(|e| {
            TrackerError::InvalidResponse(format!("lifetime fees '{}' is not lamports: {}", raw, e))
        }),
        Value::Number(number) => number.as_u64().ok_or_else(|| {
            TrackerError::InvalidResponse(format!("lifetime fees {} is not lamports", number))
        }),
        other => Err(TrackerError::InvalidResponse(format!(
            "unexpected lifetime fees payload: {}",
            other
        ))),
    }
}

#[async_trait]
impl FeeShareProvider for BagsApiClient {
    #[instrument(skip(self))]
    async fn wallet_for_twitter(&self, username: &str) -> Result<String, TrackerError> {
        let request = self
            .http_client
            .get(self.url("/token-launch/fee-share/wallet/twitter"))
            .query(&[("twitterUsername", username)]);

        let response = self.authorized(request).send().await?;
        let wallet: String = Self::read_envelope(response, "wallet address").await?;

        if wallet.trim().is_empty() {
            return Err(TrackerError::InvalidResponse(
                "failed to get wallet address from API response".to_string(),
            ));
        }

        debug!("Resolved @{} to wallet {}", username, wallet);
        Ok(wallet)
    }

    #[instrument(skip(self))]
    async fn lifetime_fees(&self, token_mint: &str) -> Result<u64, TrackerError> {
        let request = self
            .http_client
            .get(self.url("/token-launch/lifetime-fees"))
            .query(&[("tokenMint", token_mint)]);

        let response = self.authorized(request).send().await?;
        let raw: Value = Self::read_envelope(response, "lifetime fees").await?;
        parse_lamports(&raw)
    }

    #[instrument(skip(self))]
    async fn claim_transactions(&self, fee_claimer: &str) -> Result<Value, TrackerError> {
        // json() leaves an existing Content-Type alone, so authorize first
        let request = self
            .authorized(self.http_client.post(self.url("/token-launch/claim-txs")))
            .json(&serde_json::json!({ "feeClaimer": fee_claimer }));

        let response = Self::checked(request.send().await?)?;
        Ok(response.json().await?)
    }
}
