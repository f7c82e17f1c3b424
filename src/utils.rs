//! Utility functions for Branca tokens

use crate::constants::sizes;
use rand::rngs::OsRng;
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Get current timestamp in seconds since Unix epoch, as stored in a token
///
/// Clocks set before 1970 read as 0; times past 2106 saturate at `u32::MAX`.
pub fn current_timestamp() -> u32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    u32::try_from(secs).unwrap_or(u32::MAX)
}

/// Draw a fresh nonce from the operating system's entropy source
pub fn random_nonce() -> [u8; sizes::NONCE] {
    let mut nonce = [0u8; sizes::NONCE];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
