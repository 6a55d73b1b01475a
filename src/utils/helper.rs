use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::error::TrackerError;

/// Parse a pubkey from string, with better error messages
pub fn parse_pubkey(s: &str) -> Result<Pubkey, TrackerError> {
    Pubkey::from_str(s).map_err(|e| TrackerError::InvalidAddress {
        address: s.to_string(),
        reason: e.to_string(),
    })
}

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Format an address for display (truncated)
pub fn format_pubkey(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
