//! Wallet resolution, funds aggregation and periodic polling

pub mod funds_tracker;
pub mod poller;
pub mod wallet_cache;
pub mod wallet_resolver;

pub use funds_tracker::FundsTracker;
pub use poller::{start_tracking, start_tracking_with_handler, TrackingHandle};
pub use wallet_cache::WalletCache;
pub use wallet_resolver::WalletResolver;
