//! Small conversion and formatting helpers

pub mod helper;

pub use helper::{format_pubkey, lamports_to_sol, parse_pubkey};
