//! # Token header
//!
//! Every Branca token starts with a fixed 29-byte header:
//!
//! | Offset | Length | Field |
//! |---|---|---|
//! | 0 | 1 | version, always `0xBA` |
//! | 1 | 4 | creation time, big-endian seconds since the Unix epoch |
//! | 5 | 24 | XChaCha20 nonce |
//!
//! The header travels in the clear and is authenticated as associated data,
//! so changing any bit of it invalidates the token.

use crate::constants::{offsets, sizes, VERSION};
use crate::error::Rejection;

/// Parsed token header.
///
/// The version is implied: a `Header` value always describes a version `0xBA` token.
///
/// # Example
///
/// ```
/// use branca::Header;
///
/// let header = Header::new(0, [0xBE; 24]);
/// let bytes = header.to_bytes();
/// assert_eq!(bytes[0], 0xBA);
/// assert_eq!(&bytes[1..5], &[0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Creation time in seconds since the Unix epoch
    pub timestamp: u32,
    /// Nonce used to encrypt the payload
    pub nonce: [u8; sizes::NONCE],
}

impl Header {
    /// Create a header for a token created at `timestamp`
    pub fn new(timestamp: u32, nonce: [u8; sizes::NONCE]) -> Self {
        Self { timestamp, nonce }
    }

    /// Serialize the header in wire order
    pub fn to_bytes(&self) -> [u8; sizes::HEADER] {
        let mut bytes = [0u8; sizes::HEADER];
        bytes[offsets::VERSION] = VERSION;
        bytes[offsets::TIMESTAMP..offsets::NONCE].copy_from_slice(&self.timestamp.to_be_bytes());
        bytes[offsets::NONCE..offsets::CIPHERTEXT].copy_from_slice(&self.nonce);
        bytes
    }

    /// Parse the header at the start of a decoded token.
    ///
    /// The version byte is checked first, before anything else is read.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, Rejection> {
        let version = *data.first().ok_or(Rejection::TooShort { len: 0 })?;
        if version != VERSION {
            return Err(Rejection::InvalidVersion(version));
        }
        if data.len() < sizes::HEADER {
            return Err(Rejection::TooShort { len: data.len() });
        }

        let mut timestamp = [0u8; sizes::TIMESTAMP];
        timestamp.copy_from_slice(&data[offsets::TIMESTAMP..offsets::NONCE]);
        let mut nonce = [0u8; sizes::NONCE];
        nonce.copy_from_slice(&data[offsets::NONCE..offsets::CIPHERTEXT]);

        Ok(Self {
            timestamp: u32::from_be_bytes(timestamp),
            nonce,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let header = Header::new(0x0758_0C00, [0xBE; sizes::NONCE]);
        let bytes = header.to_bytes();

        assert_eq!(bytes.len(), 29);
        assert_eq!(bytes[0], 0xBA);
        assert_eq!(&bytes[1..5], &[0x07, 0x58, 0x0C, 0x00]);
        assert!(bytes[5..].iter().all(|&b| b == 0xBE));
    }

    #[test]
    fn parse_reads_back_fields() {
        let header = Header::new(u32::MAX, [7; sizes::NONCE]);
        let mut data = header.to_bytes().to_vec();
        data.extend_from_slice(&[0u8; sizes::TAG]);

        assert_eq!(Header::parse(&data), Ok(header));
    }

    #[test]
    fn parse_rejects_wrong_version() {
        let mut data = Header::new(0, [0; sizes::NONCE]).to_bytes();
        data[0] = 0xBB;
        assert_eq!(Header::parse(&data), Err(Rejection::InvalidVersion(0xBB)));
    }

    #[test]
    fn parse_rejects_truncated_header() {
        let data = Header::new(0, [0; sizes::NONCE]).to_bytes();
        assert_eq!(
            Header::parse(&data[..10]),
            Err(Rejection::TooShort { len: 10 })
        );
        assert_eq!(Header::parse(&[]), Err(Rejection::TooShort { len: 0 }));
    }
}
