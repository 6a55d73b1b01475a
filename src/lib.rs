//! Fee-share Funds Tracker Library
//!
//! Tracks the funds raised for a campaign through bags.fm fee sharing: the
//! wallet linked to a Twitter handle, its SOL balance, and the USD value at
//! the current SOL price, with optional periodic polling.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod tracker;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::{RpcBackend, TrackerConfig};
pub use error::TrackerError;
pub use handlers::ConsoleEventHandler;
pub use models::{
    format_usd, FundsRaisedSnapshot, HealthStatus, LifetimeFees, SnapshotSource, WalletBalance,
};
pub use providers::{
    BagsApiClient, CoinGeckoPriceProvider, JsonRpcBalanceProvider, SolanaRpcBalanceProvider,
};
pub use tracker::{FundsTracker, TrackingHandle, WalletCache, WalletResolver};
pub use traits::{BalanceProvider, FeeShareProvider, FundsEventHandler, PriceProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, TrackerError>;
