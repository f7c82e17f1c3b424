//! Error types for the Branca library

use thiserror::Error;

/// Errors that can occur when working with Branca tokens
///
/// Construction errors (`InvalidKeyLength`, `InvalidHexKey`) signal misuse and
/// are reported immediately. Every decode failure, whatever its cause, is
/// reported as [`Error::InvalidToken`] so that callers probing tokens learn
/// nothing about which check failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key is not exactly 32 bytes
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length provided
        actual: usize,
    },

    /// Key string is not 64 hexadecimal characters
    #[error("Invalid hex key: {0}")]
    InvalidHexKey(String),

    /// Caller-supplied nonce is not exactly 24 bytes
    #[error("Invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Expected nonce length in bytes
        expected: usize,
        /// Actual nonce length provided
        actual: usize,
    },

    /// Character outside the base62 alphabet
    #[error("Invalid base62 character {character:?} at position {position}")]
    InvalidBase62 {
        /// Offending character
        character: char,
        /// Byte offset of the character in the input
        position: usize,
    },

    /// The AEAD primitive refused to encrypt the payload
    #[error("Encryption failed")]
    Encryption,

    /// Token could not be decoded, authenticated, or is expired
    #[error("Invalid token")]
    InvalidToken,
}

/// Why a token was refused
///
/// Never returned to callers; it only travels as far as the decode log event.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// Character outside the base62 alphabet
    #[error("malformed token: character outside the base62 alphabet")]
    MalformedToken,

    /// Decoded bytes are shorter than header plus tag
    #[error("malformed token: {len} bytes is shorter than the minimum")]
    TooShort { len: usize },

    /// First byte is not the Branca version
    #[error("unsupported version 0x{0:02x}")]
    InvalidVersion(u8),

    /// Token is older than the configured lifetime
    #[error("token expired: {elapsed}s elapsed, lifetime is {ttl}s")]
    Expired { elapsed: u32, ttl: u32 },

    /// Tag did not verify under this key and header
    #[error("authentication failed")]
    AuthenticationFailure,
}
