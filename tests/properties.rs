//! Property-based tests for the base62 codec and token round trips.

use branca::{base62, Branca, Error, FixedClock, Key};
use proptest::prelude::*;

fn codec(key: [u8; 32], now: u32, ttl: Option<u32>) -> Branca {
    let builder = Branca::builder(Key::from_bytes(key)).clock(FixedClock::new(now));
    let builder = match ttl {
        Some(ttl) => builder.ttl(ttl),
        None => builder.no_expiry(),
    };
    builder.build()
}

proptest! {
    #[test]
    fn base62_round_trips_without_leading_zero(
        first in 1u8..=255,
        rest in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let mut bytes = vec![first];
        bytes.extend(rest);
        let encoded = base62::encode(&bytes);
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric()));
        prop_assert_eq!(base62::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn base62_decode_is_canonical(s in "[1-9A-Za-z][0-9A-Za-z]{0,80}") {
        let decoded = base62::decode(&s).unwrap();
        prop_assert_eq!(base62::encode(&decoded), s);
    }

    #[test]
    fn token_round_trip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        timestamp in any::<u32>(),
        payload in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let branca = codec(key, timestamp, Some(0));
        let token = branca.encode_with_nonce(&payload, timestamp, &nonce).unwrap();
        let decoded = branca.decode(&token).unwrap();
        prop_assert_eq!(decoded.payload(), payload.as_slice());
        prop_assert_eq!(decoded.timestamp(), timestamp);
    }

    #[test]
    fn wrong_key_is_rejected(
        key in any::<[u8; 32]>(),
        other in any::<[u8; 32]>(),
        payload in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(key != other);
        let token = codec(key, 0, None).encode_at(&payload, 0).unwrap();
        prop_assert_eq!(codec(other, 0, None).decode(&token), Err(Error::InvalidToken));
    }

    #[test]
    fn tokens_older_than_ttl_are_rejected(
        timestamp in 0u32..1_000_000,
        ttl in 0u32..1_000_000,
        age in 0u32..2_000_000,
    ) {
        let now = timestamp + age;
        let branca = codec([7; 32], now, Some(ttl));
        let token = branca.encode_at(b"payload", timestamp).unwrap();
        prop_assert_eq!(branca.is_valid(&token), age <= ttl);
    }
}
