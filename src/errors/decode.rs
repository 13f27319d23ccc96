// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from reading ABI-encoded log data.
///
/// These never escape [`EventDecoder::decode`](crate::decoders::EventDecoder::decode),
/// which falls back to best-effort extraction instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid hex data: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Data too short: needed {needed} bytes at offset {offset}, have {available}")]
    DataTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Offset {0} does not fit in the data section")]
    BadOffset(String),

    #[error("Type '{0}' cannot be decoded from a single word")]
    UnsupportedType(String),
}
