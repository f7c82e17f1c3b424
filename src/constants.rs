//! # Constants for Branca tokens
//!
//! This module provides the fixed sizes and values of the Branca wire format,
//! along with the base62 alphabet used for the textual representation.

/// Version byte that starts every Branca token
pub const VERSION: u8 = 0xBA;

/// Default token lifetime in seconds (one hour)
pub const DEFAULT_TTL: u32 = 3600;

/// Sizes of the fields that make up a token
pub mod sizes {
    /// Length of a secret key in bytes
    pub const KEY: usize = 32;
    /// Length of a hex-encoded secret key in characters
    pub const HEX_KEY: usize = KEY * 2;
    /// Length of the version field
    pub const VERSION: usize = 1;
    /// Length of the big-endian timestamp field
    pub const TIMESTAMP: usize = 4;
    /// Length of the XChaCha20 nonce
    pub const NONCE: usize = 24;
    /// Length of the header (version, timestamp, nonce)
    pub const HEADER: usize = VERSION + TIMESTAMP + NONCE;
    /// Length of the Poly1305 authentication tag
    pub const TAG: usize = 16;
    /// Shortest possible decoded token (empty payload)
    pub const MIN_TOKEN: usize = HEADER + TAG;
}

/// Byte offsets of the header fields
pub mod offsets {
    use super::sizes;

    /// Offset of the version byte
    pub const VERSION: usize = 0;
    /// Offset of the timestamp
    pub const TIMESTAMP: usize = VERSION + sizes::VERSION;
    /// Offset of the nonce
    pub const NONCE: usize = TIMESTAMP + sizes::TIMESTAMP;
    /// Offset of the ciphertext
    pub const CIPHERTEXT: usize = NONCE + sizes::NONCE;
}

/// Base62 alphabet: digits, then uppercase, then lowercase
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
