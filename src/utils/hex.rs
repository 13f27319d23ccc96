// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Format predicates for the hex strings that travel through the SDK.
//!
//! Addresses, transaction hashes and log topics stay as `String` at the API
//! boundary, the same shape the wallet and RPC layers hand them over in.
//! These helpers are the single place their format rules live.

use alloy_primitives::U256;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DecodeError;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern compiles"));
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{64}$").expect("word pattern compiles"));

/// `0x` followed by exactly 40 hex digits, either case.
///
/// ```
/// use compound_max::utils::is_valid_address;
///
/// assert!(is_valid_address(&format!("0x{}", "a".repeat(40))));
/// assert!(!is_valid_address("0x123"));
/// ```
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// `0x` followed by exactly 64 hex digits.
pub fn is_valid_transaction_hash(hash: &str) -> bool {
    WORD_RE.is_match(hash)
}

/// Log topics are 32-byte words, the same shape as a transaction hash.
pub fn is_valid_topic(topic: &str) -> bool {
    WORD_RE.is_match(topic)
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Read a hex quantity (with or without `0x`) into a 256-bit integer.
///
/// `"0x"` and the empty string are zero. Returns `None` for non-hex input or
/// values wider than 256 bits.
pub fn parse_quantity(value: &str) -> Option<U256> {
    let digits = strip_prefix(value.trim());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(U256::ZERO);
    }
    if significant.len() > 64 {
        return None;
    }
    U256::from_str_radix(significant, 16).ok()
}

/// The right-most 20 bytes of a topic, rendered as an address.
///
/// Indexed `address` parameters are stored left-padded to 32 bytes.
pub fn address_from_topic(topic: &str) -> String {
    let digits: Vec<char> = strip_prefix(topic)
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect();
    let start = digits.len().saturating_sub(40);
    let tail: String = digits[start..].iter().collect();
    format!("0x{:0>40}", tail.to_lowercase())
}

/// Decode a hex payload into bytes. Odd-length input gains a leading `0`.
pub fn decode_hex_bytes(value: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = strip_prefix(value.trim());
    if digits.len() % 2 == 1 {
        let padded = format!("0{}", digits);
        return Ok(::hex::decode(padded)?);
    }
    Ok(::hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validation() {
        assert!(is_valid_address("0x1234567890123456789012345678901234567890"));
        assert!(is_valid_address("0xABCDEF1234567890ABCDEF1234567890ABCDEF12"));
        assert!(is_valid_address("0xabcdef1234567890abcdef1234567890abcdef12"));
        assert!(is_valid_address("0x0000000000000000000000000000000000000000"));
        assert!(is_valid_address(&format!("0x{}", "a".repeat(40))));

        assert!(!is_valid_address("0x123"));
        assert!(!is_valid_address("0xinvalid"));
        assert!(!is_valid_address("not-an-address"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address(&format!("0x{}", "a".repeat(41))));
        assert!(!is_valid_address(&format!("0x{}g", "a".repeat(39))));
        assert!(!is_valid_address(&"a".repeat(42)));
    }

    #[test]
    fn test_transaction_hash_validation() {
        assert!(is_valid_transaction_hash(
            "0x1234567890123456789012345678901234567890123456789012345678901234"
        ));
        assert!(!is_valid_transaction_hash("0xinvalid"));
        assert!(!is_valid_transaction_hash("not-a-hash"));
        assert!(!is_valid_transaction_hash("0x123"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x"), Some(U256::ZERO));
        assert_eq!(parse_quantity("0x0"), Some(U256::ZERO));
        assert_eq!(parse_quantity("0x1"), Some(U256::from(1u64)));
        assert_eq!(
            parse_quantity("0x0000000000000000000000000000000000000000000000000000000000000064"),
            Some(U256::from(100u64))
        );
        assert_eq!(parse_quantity("ff"), Some(U256::from(255u64)));
        assert_eq!(parse_quantity("0xzz"), None);
        assert_eq!(parse_quantity(&format!("0x1{}", "0".repeat(64))), None);
        assert_eq!(parse_quantity(&format!("0x{}", "f".repeat(64))), Some(U256::MAX));
    }

    #[test]
    fn test_address_from_topic() {
        let topic = format!("0x{}{}", "0".repeat(24), "AbCdEf1234567890abcdef1234567890ABCDEF12");
        assert_eq!(
            address_from_topic(&topic),
            "0xabcdef1234567890abcdef1234567890abcdef12"
        );
        assert_eq!(address_from_topic(""), format!("0x{}", "0".repeat(40)));
    }

    #[test]
    fn test_decode_hex_bytes() {
        assert_eq!(decode_hex_bytes("0x68656c6c6f").unwrap(), b"hello".to_vec());
        assert_eq!(decode_hex_bytes("0x1").unwrap(), vec![1u8]);
        assert!(decode_hex_bytes("0x").unwrap().is_empty());
        assert!(decode_hex_bytes("0xzz").is_err());
    }
}
