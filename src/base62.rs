//! # Base62 codec
//!
//! Converts between byte strings and base62 digit strings by treating the
//! input as one big-endian unsigned integer and repeatedly dividing it.
//!
//! This is not a fixed-width encoding: leading zero bytes carry no value and
//! do not survive a round trip. Branca tokens always start with the non-zero
//! version byte, so the token codec never hits this, but the codec should not
//! be reused for arbitrary binary data without an external length.
//!
//! ```
//! use branca::base62;
//!
//! assert_eq!(base62::encode(&[0x01, 0x00]), "48");
//! assert_eq!(base62::decode("48").unwrap(), vec![0x01, 0x00]);
//! assert!(base62::decode("4_8").is_err());
//! ```

use crate::constants::BASE62_ALPHABET;
use crate::error::Error;

const INVALID: u8 = 0xFF;

/// Digit value of every byte, `INVALID` outside the alphabet
const DIGIT_VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < BASE62_ALPHABET.len() {
        table[BASE62_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode bytes as a base62 string
///
/// An empty input yields an empty string.
pub fn encode(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    // log(256) / log(62) ~= 1.344
    let mut digits = Vec::with_capacity(bytes.len() * 1344 / 1000 + 1);
    let mut number = bytes.to_vec();
    let mut quotient = Vec::with_capacity(number.len());

    while !number.is_empty() {
        let remainder = divide(&number, 256, 62, &mut quotient);
        digits.push(BASE62_ALPHABET[remainder as usize]);
        std::mem::swap(&mut number, &mut quotient);
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Decode a base62 string into the shortest big-endian byte string of the same value
///
/// Fails on any character outside the base62 alphabet.
pub fn decode(data: &str) -> Result<Vec<u8>, Error> {
    let mut number = Vec::with_capacity(data.len());
    for (position, c) in data.char_indices() {
        let value = u8::try_from(c)
            .map(|b| DIGIT_VALUES[b as usize])
            .unwrap_or(INVALID);
        if value == INVALID {
            return Err(Error::InvalidBase62 { character: c, position });
        }
        number.push(value);
    }

    // log(62) / log(256) ~= 0.744
    let mut bytes = Vec::with_capacity(number.len() * 744 / 1000 + 1);
    let mut quotient = Vec::with_capacity(number.len());

    while !number.is_empty() {
        let remainder = divide(&number, 62, 256, &mut quotient);
        bytes.push(remainder as u8);
        std::mem::swap(&mut number, &mut quotient);
    }

    bytes.reverse();
    Ok(bytes)
}

/// Long division of a big-endian number in base `from` by `divisor`
///
/// Writes the quotient without leading zeros into `quotient` and returns the remainder.
fn divide(number: &[u8], from: u32, divisor: u32, quotient: &mut Vec<u8>) -> u32 {
    quotient.clear();
    let mut remainder = 0u32;

    for &digit in number {
        let accumulator = remainder * from + u32::from(digit);
        let q = accumulator / divisor;
        remainder = accumulator % divisor;

        if !quotient.is_empty() || q != 0 {
            // q < from because remainder < divisor and digit < from
            quotient.push(q as u8);
        }
    }

    remainder
}
