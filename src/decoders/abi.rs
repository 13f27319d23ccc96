// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Minimal ABI reader for event payloads.
//!
//! Values come back as JSON so the decoder can hand out a loosely typed
//! payload: integers as decimal strings (they do not fit a JSON number),
//! addresses and byte strings as lowercase hex, booleans as booleans,
//! tuples and arrays as JSON arrays.

use alloy_primitives::{I256, U256};
use serde_json::Value;

use crate::errors::DecodeError;
use crate::subscriptions::ParamType;
use crate::utils::{address_from_topic, decode_hex_bytes, parse_quantity};

const WORD: usize = 32;

fn word_at(data: &[u8], pos: usize) -> Result<&[u8], DecodeError> {
    let end = pos.checked_add(WORD).ok_or_else(|| DecodeError::BadOffset(pos.to_string()))?;
    data.get(pos..end).ok_or(DecodeError::DataTooShort {
        offset: pos,
        needed: WORD,
        available: data.len(),
    })
}

fn read_usize(data: &[u8], pos: usize) -> Result<usize, DecodeError> {
    let value = U256::from_be_slice(word_at(data, pos)?);
    usize::try_from(value).map_err(|_| DecodeError::BadOffset(value.to_string()))
}

fn overflow(what: &ParamType) -> DecodeError {
    DecodeError::BadOffset(format!("head of {} overflows", what))
}

/// Number of head bytes a value of this type occupies.
fn head_size(kind: &ParamType) -> Result<usize, DecodeError> {
    if kind.is_dynamic() {
        return Ok(WORD);
    }
    match kind {
        ParamType::Tuple(members) => members.iter().try_fold(0usize, |total, member| {
            total
                .checked_add(head_size(member)?)
                .ok_or_else(|| overflow(kind))
        }),
        ParamType::Array(element, Some(len)) => head_size(element)?
            .checked_mul(*len)
            .ok_or_else(|| overflow(kind)),
        _ => Ok(WORD),
    }
}

/// Every element of a `count`-long sequence starting at `base` needs at
/// least one word, so the data must hold `count` words from there.
fn ensure_room(data: &[u8], base: usize, count: usize) -> Result<(), DecodeError> {
    let needed = count.saturating_mul(WORD);
    if needed > data.len().saturating_sub(base) {
        return Err(DecodeError::DataTooShort {
            offset: base,
            needed,
            available: data.len(),
        });
    }
    Ok(())
}

pub(crate) fn word_value(kind: &ParamType, word: &[u8]) -> Value {
    let number = U256::from_be_slice(word);
    match kind {
        ParamType::Address => Value::String(format!("0x{}", hex::encode(&word[12..]))),
        ParamType::Bool => Value::Bool(!number.is_zero()),
        ParamType::Uint(_) => Value::String(number.to_string()),
        ParamType::Int(_) => Value::String(I256::from_raw(number).to_string()),
        ParamType::FixedBytes(size) => {
            Value::String(format!("0x{}", hex::encode(&word[..(*size).min(WORD)])))
        }
        _ => Value::String(format!("0x{}", hex::encode(word))),
    }
}

fn decode_sequence(
    kinds: &[ParamType],
    data: &[u8],
    base: usize,
) -> Result<Vec<Value>, DecodeError> {
    let mut values = Vec::with_capacity(kinds.len());
    let mut head = base;
    for kind in kinds {
        values.push(decode_value(kind, data, base, head)?);
        head = head
            .checked_add(head_size(kind)?)
            .ok_or_else(|| overflow(kind))?;
    }
    Ok(values)
}

fn decode_value(
    kind: &ParamType,
    data: &[u8],
    base: usize,
    head: usize,
) -> Result<Value, DecodeError> {
    if kind.is_dynamic() {
        let offset = read_usize(data, head)?;
        let pos = base
            .checked_add(offset)
            .ok_or_else(|| DecodeError::BadOffset(offset.to_string()))?;
        return decode_tail(kind, data, pos);
    }

    match kind {
        ParamType::Tuple(members) => Ok(Value::Array(decode_sequence(members, data, head)?)),
        ParamType::Array(element, Some(len)) => {
            ensure_room(data, head, *len)?;
            let kinds = vec![element.as_ref().clone(); *len];
            Ok(Value::Array(decode_sequence(&kinds, data, head)?))
        }
        other => Ok(word_value(other, word_at(data, head)?)),
    }
}

/// Decode a dynamic value whose content starts at `pos`.
fn decode_tail(kind: &ParamType, data: &[u8], pos: usize) -> Result<Value, DecodeError> {
    match kind {
        ParamType::String | ParamType::Bytes => {
            let len = read_usize(data, pos)?;
            let start = pos + WORD;
            let bytes = data
                .get(start..start.saturating_add(len))
                .ok_or(DecodeError::DataTooShort {
                    offset: start,
                    needed: len,
                    available: data.len(),
                })?;
            Ok(match kind {
                ParamType::String => Value::String(String::from_utf8_lossy(bytes).into_owned()),
                _ => Value::String(format!("0x{}", hex::encode(bytes))),
            })
        }
        ParamType::Array(element, len) => {
            let (count, base) = match len {
                Some(n) => (*n, pos),
                None => (read_usize(data, pos)?, pos + WORD),
            };
            ensure_room(data, base, count)?;
            let kinds = vec![element.as_ref().clone(); count];
            Ok(Value::Array(decode_sequence(&kinds, data, base)?))
        }
        ParamType::Tuple(members) => Ok(Value::Array(decode_sequence(members, data, pos)?)),
        other => Err(DecodeError::UnsupportedType(other.to_string())),
    }
}

/// Decode the non-indexed parameters of an event from its hex `data`.
pub(crate) fn decode_data(kinds: &[ParamType], data: &str) -> Result<Vec<Value>, DecodeError> {
    let bytes = decode_hex_bytes(data)?;
    decode_sequence(kinds, &bytes, 0)
}

/// Indexed parameters live in topics. Dynamic types are stored as their
/// hash, which is returned unchanged.
pub(crate) fn decode_topic(kind: &ParamType, topic: &str) -> Value {
    if kind.is_dynamic() || matches!(kind, ParamType::Tuple(_) | ParamType::Array(..)) {
        return Value::String(topic.to_lowercase());
    }
    match kind {
        ParamType::Address => Value::String(address_from_topic(topic)),
        _ => match decode_hex_bytes(topic) {
            Ok(bytes) if bytes.len() == WORD => word_value(kind, &bytes),
            _ => match parse_quantity(topic) {
                Some(n) => word_value(kind, &n.to_be_bytes::<32>()),
                None => Value::String(topic.to_string()),
            },
        },
    }
}

/// Read the `index`-th 32-byte word of hex `data` as an integer, `None`
/// when the data does not reach that word.
///
/// Lenient: a short final word is read as far as it goes.
pub(crate) fn lenient_word(data: &str, index: usize) -> Option<U256> {
    let digits = data.strip_prefix("0x").unwrap_or(data);
    let start = index * 64;
    if start >= digits.len() || !digits.is_ascii() {
        return None;
    }
    let end = (start + 64).min(digits.len());
    parse_quantity(&digits[start..end])
}

/// Like [`lenient_word`], with missing or malformed words read as zero.
pub(crate) fn data_word(data: &str, index: usize) -> U256 {
    lenient_word(data, index).unwrap_or(U256::ZERO)
}

/// Content of a `data` section holding exactly one ABI `bytes` or `string`.
pub(crate) fn decode_dynamic_bytes(data: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = decode_hex_bytes(data)?;
    let offset = read_usize(&bytes, 0)?;
    let len = read_usize(&bytes, offset)?;
    let start = offset + WORD;
    bytes
        .get(start..start.saturating_add(len))
        .map(<[u8]>::to_vec)
        .ok_or(DecodeError::DataTooShort {
            offset: start,
            needed: len,
            available: bytes.len(),
        })
}
