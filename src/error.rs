use thiserror::Error;

/// Errors surfaced by the fee-share tracker library
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from an upstream API
    #[error("API error: {status} - {reason}")]
    Api { status: u16, reason: String },

    /// The upstream answered but the payload was not what we expected
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// JSON-RPC error object or RPC client failure
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("invalid wallet address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Wallet lookup for a social handle failed
    #[error("wallet lookup for @{handle} failed: {source}")]
    Lookup {
        handle: String,
        #[source]
        source: Box<TrackerError>,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    pub(crate) fn lookup(handle: &str, source: TrackerError) -> Self {
        TrackerError::Lookup {
            handle: handle.to_string(),
            source: Box::new(source),
        }
    }
}

/// Map a non-2xx response to `TrackerError::Api`
pub(crate) fn status_error(status: reqwest::StatusCode) -> TrackerError {
    TrackerError::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}
