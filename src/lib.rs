//! # Branca
//!
//! A Rust implementation of [Branca](https://branca.io) tokens: authenticated
//! and encrypted bearer tokens built on XChaCha20-Poly1305.
//!
//! ## Overview
//!
//! A Branca token is a fixed header (version, creation time, nonce) followed by
//! the encrypted payload and a Poly1305 tag. The header is authenticated as
//! associated data, and the whole thing is base62 encoded so it can be used
//! in URLs, headers and cookies without escaping.
//!
//! ```text
//! Version (1B) || Timestamp (4B) || Nonce (24B) || Ciphertext (*) || Tag (16B)
//! ```
//!
//! ## Features
//!
//! - Payloads are encrypted, not just signed
//! - Optional token lifetime, checked against the embedded creation time
//! - Failure-closed decoding: every invalid token yields the same error
//! - Keys are wiped from memory when dropped
//! - Injectable clock for deterministic tests
//!
//! ## Basic Example
//!
//! ```rust
//! use branca::{Branca, Key};
//!
//! // 32-byte secret key, usually loaded from configuration as hex
//! let key: Key = "73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d6974"
//!     .parse()
//!     .expect("Invalid key");
//!
//! let branca = Branca::builder(key)
//!     .ttl(3600) // 1 hour
//!     .build();
//!
//! // Create a token
//! let token = branca.encode_str("user:1234").expect("Failed to encode token");
//!
//! // Decode and authenticate it
//! let decoded = branca.decode(&token).expect("Failed to decode token");
//! assert_eq!(decoded.payload_str(), Some("user:1234"));
//! ```
//!
//! ## Failure handling
//!
//! ```rust
//! use branca::{Branca, Error, FixedClock, Key};
//!
//! let branca = Branca::builder(Key::generate())
//!     .ttl(60)
//!     .clock(FixedClock::new(10_000))
//!     .build();
//!
//! let fresh = branca.encode_at(b"payload", 9_990).unwrap();
//! let stale = branca.encode_at(b"payload", 9_000).unwrap();
//!
//! assert!(branca.is_valid(&fresh));
//! assert_eq!(branca.decode(&stale), Err(Error::InvalidToken));
//! assert_eq!(branca.decode("garbage!"), Err(Error::InvalidToken));
//! ```

pub mod base62;
pub mod clock;
pub mod constants;
pub mod error;
pub mod header;
pub mod key;
pub mod token;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{sizes, VERSION};
pub use error::Error;
pub use header::Header;
pub use key::Key;
pub use token::{Branca, BrancaBuilder, DecodedToken};
pub use utils::current_timestamp;
