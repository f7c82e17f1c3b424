//! Secret keys for Branca tokens

use crate::constants::sizes;
use crate::error::Error;
use ct_codecs::{Decoder, Hex};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte secret key, wiped from memory on drop.
///
/// Keys are usually provided as 64 hexadecimal characters:
///
/// ```
/// use branca::Key;
///
/// let key: Key = "73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d6974"
///     .parse()
///     .unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
///
/// assert!(Key::from_hex("746f6f73686f72746b6579").is_err());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; sizes::KEY]);

impl Key {
    /// Create a key from raw bytes
    pub fn from_bytes(bytes: [u8; sizes::KEY]) -> Self {
        Self(bytes)
    }

    /// Create a key from a slice, which must be exactly 32 bytes long
    pub fn from_slice(slice: &[u8]) -> Result<Self, Error> {
        if slice.len() != sizes::KEY {
            return Err(Error::InvalidKeyLength {
                expected: sizes::KEY,
                actual: slice.len(),
            });
        }
        let mut bytes = [0u8; sizes::KEY];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Parse a key from 64 hexadecimal characters (either case)
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        if hex.len() != sizes::HEX_KEY {
            return Err(Error::InvalidHexKey(format!(
                "expected {} characters, got {}",
                sizes::HEX_KEY,
                hex.len()
            )));
        }

        let mut bytes = [0u8; sizes::KEY];
        let decoded_len = Hex::decode(&mut bytes, hex, None)
            .map_err(|_| {
                Error::InvalidHexKey("key must only contain hexadecimal characters".to_string())
            })?
            .len();

        let key = Self::from_slice(&bytes[..decoded_len]);
        bytes.zeroize();
        key
    }

    /// Generate a random key from the operating system's entropy source
    pub fn generate() -> Self {
        let mut bytes = [0u8; sizes::KEY];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8; sizes::KEY] {
        &self.0
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl From<[u8; sizes::KEY]> for Key {
    fn from(bytes: [u8; sizes::KEY]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_KEY_1: &str = "73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d6974";
    const VALID_KEY_2: &str = "77726f6e677365637265746b6579796f7573686f756c646e6f74636f6d6d6974";

    #[test]
    fn parses_valid_hex_keys() {
        for hex in [VALID_KEY_1, VALID_KEY_2] {
            let key = Key::from_hex(hex).expect("valid key");
            assert_eq!(key.as_bytes().len(), sizes::KEY);
        }
        let key = Key::from_hex(VALID_KEY_1).unwrap();
        assert_eq!(&key.as_bytes()[..5], b"super");
    }

    #[test]
    fn accepts_uppercase_hex() {
        let lower = Key::from_hex(VALID_KEY_1).unwrap();
        let upper = Key::from_hex(&VALID_KEY_1.to_uppercase()).unwrap();
        assert_eq!(lower.as_bytes(), upper.as_bytes());
    }

    #[test]
    fn rejects_short_hex_key() {
        assert!(matches!(
            Key::from_hex("746f6f73686f72746b6579"),
            Err(Error::InvalidHexKey(_))
        ));
    }

    #[test]
    fn rejects_non_hex_characters() {
        let bad = "73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d697Z";
        assert!(matches!(Key::from_hex(bad), Err(Error::InvalidHexKey(_))));
    }

    #[test]
    fn rejects_odd_length() {
        let odd = &VALID_KEY_1[..63];
        assert!(matches!(Key::from_hex(odd), Err(Error::InvalidHexKey(_))));
    }

    #[test]
    fn rejects_wrong_slice_length() {
        assert_eq!(
            Key::from_slice(&[0u8; 31]).unwrap_err(),
            Error::InvalidKeyLength {
                expected: 32,
                actual: 31
            }
        );
        assert!(Key::try_from(&[0u8; 33][..]).is_err());
        assert!(Key::try_from(&[7u8; 32][..]).is_ok());
    }

    #[test]
    fn debug_does_not_leak_key() {
        let key = Key::from_hex(VALID_KEY_1).unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("73"));
        assert!(!rendered.contains("115"));
    }
}
