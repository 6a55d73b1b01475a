//! Core traits for the funds tracker

pub mod balance_provider;
pub mod event_handler;
pub mod fee_share_provider;
pub mod price_provider;

// Re-export for convenience
pub use balance_provider::BalanceProvider;
pub use event_handler::FundsEventHandler;
pub use fee_share_provider::FeeShareProvider;
pub use price_provider::PriceProvider;
