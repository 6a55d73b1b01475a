//! Data models for the funds tracker

pub mod balance;
pub mod funds;
pub mod health;

// Re-export for convenience
pub use balance::{LifetimeFees, WalletBalance};
pub use funds::{format_usd, FundsRaisedSnapshot, SnapshotSource};
pub use health::HealthStatus;
