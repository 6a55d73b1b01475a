use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a snapshot's numbers came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotSource {
    /// Live data from the fee-sharing API and RPC
    #[serde(rename = "bags.fm")]
    BagsFm,
    /// Aggregation failed, zeros substituted
    #[serde(rename = "fallback")]
    Fallback,
    /// The tracking tick itself failed
    #[serde(rename = "error")]
    Error,
}

impl SnapshotSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotSource::BagsFm => "bags.fm",
            SnapshotSource::Fallback => "fallback",
            SnapshotSource::Error => "error",
        }
    }
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time summary of funds raised. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsRaisedSnapshot {
    pub wallet: Option<String>,
    pub sol: f64,
    pub usd: f64,
    pub formatted: String,
    pub last_updated: DateTime<Utc>,
    pub source: SnapshotSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FundsRaisedSnapshot {
    /// Snapshot built from a live balance and price
    pub fn live(wallet: String, sol: f64, usd: f64) -> Self {
        Self {
            wallet: Some(wallet),
            sol,
            usd,
            formatted: format_usd(usd),
            last_updated: Utc::now(),
            source: SnapshotSource::BagsFm,
            error: None,
        }
    }

    /// Zeroed snapshot returned when aggregation fails
    pub fn fallback(error: impl Into<String>) -> Self {
        Self::zeroed(SnapshotSource::Fallback, error.into())
    }

    /// Zeroed snapshot synthesized by the poller when a tick fails outright
    pub fn errored(error: impl Into<String>) -> Self {
        Self::zeroed(SnapshotSource::Error, error.into())
    }

    fn zeroed(source: SnapshotSource, error: String) -> Self {
        Self {
            wallet: None,
            sol: 0.0,
            usd: 0.0,
            formatted: "$0".to_string(),
            last_updated: Utc::now(),
            source,
            error: Some(error),
        }
    }
}

/// Render a USD amount the way the campaign site shows it:
/// `$1.5M` from a million up, `$3K` from a thousand up, whole dollars below.
pub fn format_usd(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        let millions = (amount / 1_000_000.0 * 10.0).round() / 10.0;
        format!("${:.1}M", millions)
    } else if amount >= 1_000.0 {
        format!("${}K", (amount / 1_000.0).round() as i64)
    } else {
        format!("${}", amount.floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_millions_with_one_decimal() {
        assert_eq!(format_usd(1_500_000.0), "$1.5M");
        assert_eq!(format_usd(1_000_000.0), "$1.0M");
        assert_eq!(format_usd(12_340_000.0), "$12.3M");
    }

    #[test]
    fn formats_thousands_rounded() {
        assert_eq!(format_usd(2_500.0), "$3K");
        assert_eq!(format_usd(1_000.0), "$1K");
        assert_eq!(format_usd(2_499.0), "$2K");
    }

    #[test]
    fn formats_small_amounts_as_whole_dollars() {
        assert_eq!(format_usd(500.0), "$500");
        assert_eq!(format_usd(999.99), "$999");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn fallback_snapshot_is_zeroed() {
        let snapshot = FundsRaisedSnapshot::fallback("boom");
        assert_eq!(snapshot.source, SnapshotSource::Fallback);
        assert_eq!(snapshot.usd, 0.0);
        assert_eq!(snapshot.formatted, "$0");
        assert_eq!(snapshot.wallet, None);
        assert_eq!(snapshot.error.as_deref(), Some("boom"));
    }

    #[test]
    fn serializes_with_camel_case_and_source_tag() {
        let snapshot = FundsRaisedSnapshot::live("wallet".into(), 2.0, 300.0);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["source"], "bags.fm");
        assert_eq!(json["formatted"], "$300");
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("error").is_none());
    }
}
