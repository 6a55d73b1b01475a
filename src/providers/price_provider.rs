use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{status_error, TrackerError};
use crate::traits::price_provider::PriceProvider;

/// CoinGecko `simple/price` feed.
///
/// Never fails: any error is logged and reported as a price of zero, so a
/// broken price feed degrades the USD figure instead of the whole snapshot.
pub struct CoinGeckoPriceProvider {
    http_client: Client,
    base_url: String,
    token_id: String,
}

impl CoinGeckoPriceProvider {
    pub fn new(
        base_url: impl Into<String>,
        token_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TrackerError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, base_url, token_id))
    }

    pub fn with_client(
        http_client: Client,
        base_url: impl Into<String>,
        token_id: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_id: token_id.into(),
        }
    }

    /// Fetch price from external API
    async fn fetch_external_price(&self) -> Result<f64, TrackerError> {
        let response = self
            .http_client
            .get(format!("{}/simple/price", self.base_url))
            .query(&[("ids", self.token_id.as_str()), ("vs_currencies", "usd")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body: Value = response.json().await?;
        price_from_response(&body, &self.token_id).ok_or_else(|| {
            TrackerError::InvalidResponse(format!("no usd price for '{}'", self.token_id))
        })
    }
}

/// Pull `<token>.usd` out of a `simple/price` body
pub(crate) fn price_from_response(body: &Value, token_id: &str) -> Option<f64> {
    body.get(token_id)?.get("usd")?.as_f64()
}

#[async_trait]
impl PriceProvider for CoinGeckoPriceProvider {
    #[instrument(skip(self), fields(token = %self.token_id))]
    async fn get_sol_price(&self) -> Result<f64, TrackerError> {
        match self.fetch_external_price().await {
            Ok(price) => {
                debug!("{} price: ${}", self.token_id, price);
                Ok(price)
            }
            Err(e) => {
                warn!("Error fetching {} price, using 0: {}", self.token_id, e);
                Ok(0.0)
            }
        }
    }
}
