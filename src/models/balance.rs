use serde::{Deserialize, Serialize};

use crate::utils::helper::lamports_to_sol;

/// Native balance of a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub lamports: u64,
    pub sol: f64,
    pub wallet: String,
}

impl WalletBalance {
    /// Create a balance from a raw lamport amount
    pub fn from_lamports(wallet: impl Into<String>, lamports: u64) -> Self {
        Self {
            lamports,
            sol: lamports_to_sol(lamports),
            wallet: wallet.into(),
        }
    }

    /// Format balance with the SOL symbol
    pub fn formatted_sol(&self) -> String {
        format!("◎{:.4}", self.sol)
    }
}

/// Fees a token launch has generated over its lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeFees {
    pub lamports: u64,
    pub sol: f64,
    pub token_mint: String,
}

impl LifetimeFees {
    pub fn from_lamports(token_mint: impl Into<String>, lamports: u64) -> Self {
        Self {
            lamports,
            sol: lamports_to_sol(lamports),
            token_mint: token_mint.into(),
        }
    }
}
