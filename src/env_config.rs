//! Environment configuration for the server binary.

use crate::constants::DEFAULT_PORT;

/// Read `DICE_ODDS_PORT` (default 5000).
pub fn server_port() -> u16 {
    std::env::var("DICE_ODDS_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
