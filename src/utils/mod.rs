// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod hex;
pub mod units;

pub use self::hex::{
    address_from_topic, decode_hex_bytes, is_valid_address, is_valid_topic,
    is_valid_transaction_hash, parse_quantity,
};
pub use units::{format_token_amount, parse_token_amount};
