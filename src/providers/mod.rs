//! Network-backed implementations of the provider traits

pub mod bags_provider;
pub mod price_provider;
pub mod rpc_provider;

// Re-export for convenience
pub use bags_provider::BagsApiClient;
pub use price_provider::CoinGeckoPriceProvider;
pub use rpc_provider::{JsonRpcBalanceProvider, SolanaRpcBalanceProvider};
