//! Token encoding and decoding

use crate::base62;
use crate::clock::{Clock, SystemClock};
use crate::constants::{sizes, DEFAULT_TTL};
use crate::error::{Error, Rejection};
use crate::header::Header;
use crate::key::Key;
use crate::utils::random_nonce;
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Branca token codec.
///
/// Holds the cipher keyed with a 32-byte secret, the optional token lifetime,
/// and the clock used to stamp and expire tokens. Nothing in it changes after
/// construction, so one instance can be shared across threads.
///
/// # Example
///
/// ```
/// use branca::Branca;
///
/// let branca = Branca::from_hex("73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d6974")
///     .expect("valid key");
///
/// let token = branca.encode(b"user:42").expect("Failed to encode token");
/// let decoded = branca.decode(&token).expect("Failed to decode token");
/// assert_eq!(decoded.payload(), b"user:42");
///
/// assert!(branca.decode("not-a-token").is_err());
/// ```
pub struct Branca {
    cipher: XChaCha20Poly1305,
    ttl: Option<u32>,
    clock: Arc<dyn Clock>,
}

impl Branca {
    /// Create a codec with the default settings: a one hour lifetime and the system clock
    pub fn new(key: Key) -> Self {
        Self::builder(key).build()
    }

    /// Create a codec from a 64-character hex key with the default settings
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Key::from_hex(hex).map(Self::new)
    }

    /// Create a codec from a 32-byte key with the default settings
    pub fn from_slice(key: &[u8]) -> Result<Self, Error> {
        Key::from_slice(key).map(Self::new)
    }

    /// Start configuring a codec
    pub fn builder(key: Key) -> BrancaBuilder {
        BrancaBuilder::new(key)
    }

    /// Configured token lifetime in seconds, `None` if tokens never expire
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    /// Encode a payload, stamped with the current time and a random nonce
    pub fn encode(&self, payload: &[u8]) -> Result<String, Error> {
        self.encode_at(payload, self.clock.now())
    }

    /// Encode a UTF-8 payload, stamped with the current time and a random nonce
    pub fn encode_str(&self, payload: &str) -> Result<String, Error> {
        self.encode(payload.as_bytes())
    }

    /// Encode a payload with an explicit creation time and a random nonce
    pub fn encode_at(&self, payload: &[u8], timestamp: u32) -> Result<String, Error> {
        self.seal(payload, Header::new(timestamp, random_nonce()))
    }

    /// Encode a payload with an explicit creation time and nonce.
    ///
    /// The nonce must be exactly 24 bytes and must never be reused with the
    /// same key. Prefer [`Branca::encode`] outside of tests.
    pub fn encode_with_nonce(
        &self,
        payload: &[u8],
        timestamp: u32,
        nonce: &[u8],
    ) -> Result<String, Error> {
        let nonce: [u8; sizes::NONCE] =
            nonce.try_into().map_err(|_| Error::InvalidNonceLength {
                expected: sizes::NONCE,
                actual: nonce.len(),
            })?;
        self.seal(payload, Header::new(timestamp, nonce))
    }

    fn seal(&self, payload: &[u8], header: Header) -> Result<String, Error> {
        let header_bytes = header.to_bytes();

        // ciphertext || tag
        let sealed = self
            .cipher
            .encrypt(
                (&header.nonce).into(),
                Payload {
                    msg: payload,
                    aad: &header_bytes,
                },
            )
            .map_err(|_| Error::Encryption)?;

        let mut raw = Vec::with_capacity(sizes::HEADER + sealed.len());
        raw.extend_from_slice(&header_bytes);
        raw.extend_from_slice(&sealed);

        let token = base62::encode(&raw);
        trace!(payload_len = payload.len(), token_len = token.len(), "encoded branca token");
        Ok(token)
    }

    /// Decode and authenticate a token.
    ///
    /// Every failure (bad characters, truncation, wrong version, expiry, or a
    /// tag that does not verify) yields [`Error::InvalidToken`]. The cause is
    /// only reported as a `debug` tracing event.
    pub fn decode(&self, token: &str) -> Result<DecodedToken, Error> {
        self.open(token).map_err(|rejection| {
            debug!(%rejection, "rejected branca token");
            Error::InvalidToken
        })
    }

    /// Decode a token and return only its payload
    pub fn decode_payload(&self, token: &str) -> Result<Vec<u8>, Error> {
        self.decode(token).map(DecodedToken::into_payload)
    }

    /// Check whether a token decodes and authenticates under this codec
    pub fn is_valid(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    fn open(&self, token: &str) -> Result<DecodedToken, Rejection> {
        let data = base62::decode(token).map_err(|_| Rejection::MalformedToken)?;
        if data.len() < sizes::MIN_TOKEN {
            return Err(Rejection::TooShort { len: data.len() });
        }

        let header = Header::parse(&data)?;

        if let Some(ttl) = self.ttl {
            // A creation time in the future wraps around and reads as expired
            let elapsed = self.clock.now().wrapping_sub(header.timestamp);
            if elapsed > ttl {
                return Err(Rejection::Expired { elapsed, ttl });
            }
        }

        let (header_bytes, sealed) = data.split_at(sizes::HEADER);
        let payload = self
            .cipher
            .decrypt(
                (&header.nonce).into(),
                Payload {
                    msg: sealed,
                    aad: header_bytes,
                },
            )
            .map_err(|_| Rejection::AuthenticationFailure)?;

        Ok(DecodedToken {
            payload,
            timestamp: header.timestamp,
        })
    }
}

impl fmt::Debug for Branca {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branca")
            .field("ttl", &self.ttl)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Contents of a successfully decoded token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    payload: Vec<u8>,
    timestamp: u32,
}

impl DecodedToken {
    /// Decrypted payload
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload as UTF-8, if it is valid UTF-8
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }

    /// Creation time in seconds since the Unix epoch
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Take ownership of the payload
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

/// Builder for [`Branca`]
///
/// # Example
///
/// ```
/// use branca::{Branca, FixedClock, Key};
///
/// let key = Key::generate();
/// let branca = Branca::builder(key)
///     .ttl(60)
///     .clock(FixedClock::new(1_000_000))
///     .build();
///
/// let token = branca.encode_at(b"payload", 1_000_000 - 120).unwrap();
/// assert!(!branca.is_valid(&token));
/// ```
#[derive(Debug)]
pub struct BrancaBuilder {
    key: Key,
    ttl: Option<u32>,
    clock: Arc<dyn Clock>,
}

impl BrancaBuilder {
    /// Create a builder with a one hour lifetime and the system clock
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ttl: Some(DEFAULT_TTL),
            clock: Arc::new(SystemClock),
        }
    }

    /// Reject tokens older than `seconds`
    pub fn ttl(mut self, seconds: u32) -> Self {
        self.ttl = Some(seconds);
        self
    }

    /// Reject tokens older than `duration`, saturating at `u32::MAX` seconds
    pub fn ttl_duration(self, duration: std::time::Duration) -> Self {
        self.ttl(u32::try_from(duration.as_secs()).unwrap_or(u32::MAX))
    }

    /// Accept tokens of any age
    pub fn no_expiry(mut self) -> Self {
        self.ttl = None;
        self
    }

    /// Use `clock` to stamp new tokens and to check expiry
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the codec; the key is wiped once the cipher is initialized
    pub fn build(self) -> Branca {
        Branca {
            cipher: XChaCha20Poly1305::new(self.key.as_bytes().into()),
            ttl: self.ttl,
            clock: self.clock,
        }
    }
}
