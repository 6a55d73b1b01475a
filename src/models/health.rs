use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of probing the fee-sharing API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn healthy(wallet: String) -> Self {
        Self {
            healthy: true,
            wallet: Some(wallet),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn unhealthy(error: String) -> Self {
        Self {
            healthy: false,
            wallet: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }
}
