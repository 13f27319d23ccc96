// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event-signature parsing.
//!
//! Accepts the human-readable form used throughout the SDK,
//! `Name(type1,type2 indexed name2,...)`, including nested tuples, arrays and
//! `indexed` markers in either position. Parsing works on the raw string with
//! an explicit nesting depth so commas and whitespace inside a tuple never
//! split the outer parameter list.
//!
//! # Example
//! ```
//! use compound_max::subscriptions::parse_event_signature;
//!
//! let sig = parse_event_signature("Transfer(address,address,uint256)").unwrap();
//! assert_eq!(sig.name, "Transfer");
//! assert_eq!(sig.parameters.len(), 3);
//! ```

use std::fmt;

use alloy_primitives::keccak256;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::ValidationError;

static SIGNATURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\([a-zA-Z0-9_\s,\[\]()]*\)$")
        .expect("signature pattern compiles")
});
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern compiles"));

/// Deepest tuple or array nesting a parameter type may have.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Solidity parameter type as far as the SDK needs to understand it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Address,
    Bool,
    String,
    Bytes,
    FixedBytes(usize),
    Uint(usize),
    Int(usize),
    /// Element type and fixed length, `None` for `T[]`
    Array(Box<ParamType>, Option<usize>),
    Tuple(Vec<ParamType>),
    /// Anything else: user-defined types, the bare `tuple` keyword, ...
    Custom(String),
}

impl ParamType {
    /// Parse a single type such as `uint256`, `address[]` or `(uint256,bool)[2]`.
    ///
    /// Types nested deeper than [`MAX_NESTING_DEPTH`] are rejected.
    pub fn parse(type_name: &str) -> Result<ParamType, String> {
        ParamType::parse_nested(type_name, 0)
    }

    fn parse_nested(type_name: &str, depth: usize) -> Result<ParamType, String> {
        let type_name = type_name.trim();
        if type_name.is_empty() {
            return Err("empty type".to_string());
        }
        if depth > MAX_NESTING_DEPTH {
            return Err("nesting too deep".to_string());
        }

        if let Some(base) = type_name.strip_suffix(']') {
            let open = base
                .rfind('[')
                .ok_or_else(|| format!("unbalanced brackets in '{}'", type_name))?;
            let len = &base[open + 1..];
            let len = if len.trim().is_empty() {
                None
            } else {
                Some(
                    len.trim()
                        .parse::<usize>()
                        .map_err(|_| format!("bad array length in '{}'", type_name))?,
                )
            };
            let element = ParamType::parse_nested(&base[..open], depth + 1)?;
            return Ok(ParamType::Array(Box::new(element), len));
        }

        let tuple_body = type_name
            .strip_prefix("tuple(")
            .or_else(|| type_name.strip_prefix('('));
        if let Some(rest) = tuple_body {
            let inner = rest
                .strip_suffix(')')
                .ok_or_else(|| format!("unbalanced parentheses in '{}'", type_name))?;
            if inner.trim().is_empty() {
                return Ok(ParamType::Tuple(Vec::new()));
            }
            let members = split_top_level(inner)?
                .into_iter()
                .map(|member| ParamType::parse_nested(member, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(ParamType::Tuple(members));
        }

        if !NAME_RE.is_match(type_name) {
            return Err(format!("invalid type '{}'", type_name));
        }

        Ok(match type_name {
            "address" => ParamType::Address,
            "bool" => ParamType::Bool,
            "string" => ParamType::String,
            "bytes" => ParamType::Bytes,
            "uint" => ParamType::Uint(256),
            "int" => ParamType::Int(256),
            other => sized(other).unwrap_or_else(|| ParamType::Custom(other.to_string())),
        })
    }

    /// Whether the ABI encoding stores this type out of line (behind an offset).
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::String | ParamType::Bytes => true,
            ParamType::Array(_, None) => true,
            ParamType::Array(element, Some(_)) => element.is_dynamic(),
            ParamType::Tuple(members) => members.iter().any(ParamType::is_dynamic),
            _ => false,
        }
    }
}

fn sized(name: &str) -> Option<ParamType> {
    let bits_in = |digits: &str| digits.parse::<usize>().ok();
    if let Some(bits) = name.strip_prefix("uint").and_then(bits_in) {
        return (bits > 0 && bits <= 256 && bits % 8 == 0).then_some(ParamType::Uint(bits));
    }
    if let Some(bits) = name.strip_prefix("int").and_then(bits_in) {
        return (bits > 0 && bits <= 256 && bits % 8 == 0).then_some(ParamType::Int(bits));
    }
    if let Some(size) = name.strip_prefix("bytes").and_then(bits_in) {
        return (size > 0 && size <= 32).then_some(ParamType::FixedBytes(size));
    }
    None
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => write!(f, "address"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::String => write!(f, "string"),
            ParamType::Bytes => write!(f, "bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Array(element, None) => write!(f, "{}[]", element),
            ParamType::Array(element, Some(len)) => write!(f, "{}[{}]", element, len),
            ParamType::Tuple(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, ")")
            }
            ParamType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// One parameter of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventParameter {
    /// Declared name, empty when the signature omits it
    pub name: String,
    /// Type as written, with whitespace removed
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip)]
    pub kind: ParamType,
    pub indexed: bool,
}

/// A parsed event signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSignature {
    pub name: String,
    /// The signature exactly as given to the parser
    pub signature: String,
    pub parameters: Vec<EventParameter>,
}

impl EventSignature {
    /// `Name(t1,t2,...)` with parameter names, `indexed` and whitespace removed.
    pub fn canonical(&self) -> String {
        let types = self
            .parameters
            .iter()
            .map(|p| p.kind.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.name, types)
    }

    /// Keccak-256 of the canonical signature: the `topics[0]` of matching logs.
    pub fn topic_hash(&self) -> String {
        format!("0x{}", hex::encode(keccak256(self.canonical().as_bytes())))
    }

    pub fn indexed_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.indexed).count()
    }
}

impl fmt::Display for EventSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature)
    }
}

/// Split on commas at parenthesis depth zero. Fails on unbalanced parentheses.
fn split_top_level(input: &str) -> Result<Vec<&str>, String> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err("unbalanced parentheses".to_string());
                }
            }
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced parentheses".to_string());
    }
    parts.push(&input[start..]);
    Ok(parts)
}

/// Split on whitespace at parenthesis depth zero.
fn split_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth: i32 = 0;
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if c.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                tokens.push(&input[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    tokens
}

fn parse_parameter(segment: &str) -> Result<EventParameter, String> {
    let tokens = split_tokens(segment);
    let indexed = tokens.iter().any(|t| *t == "indexed");
    let rest: Vec<&str> = tokens.into_iter().filter(|t| *t != "indexed").collect();

    let (type_token, name) = match rest.as_slice() {
        [] => return Err(format!("parameter '{}' has no type", segment)),
        [ty] => (*ty, ""),
        [ty, name] => (*ty, *name),
        _ => return Err(format!("too many tokens in parameter '{}'", segment)),
    };
    if !name.is_empty() && !NAME_RE.is_match(name) {
        return Err(format!("invalid parameter name '{}'", name));
    }

    let type_name: String = type_token.chars().filter(|c| !c.is_whitespace()).collect();
    let kind = ParamType::parse(&type_name)?;
    Ok(EventParameter {
        name: name.to_string(),
        type_name,
        kind,
        indexed,
    })
}

fn reject(signature: &str, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidEventSignature {
        signature: signature.to_string(),
        reason: reason.into(),
    }
}

/// Parse `Name(type1,type2,...)` into its name and parameter list.
///
/// Rejects input with a missing opening or closing parenthesis, an empty or
/// non-identifier name, unbalanced nesting, or an empty parameter slot.
/// `Name()` is accepted and yields no parameters.
pub fn parse_event_signature(signature: &str) -> Result<EventSignature, ValidationError> {
    let open = signature
        .find('(')
        .ok_or_else(|| reject(signature, "missing opening parenthesis"))?;
    let name = &signature[..open];
    if name.is_empty() {
        return Err(reject(signature, "empty event name"));
    }
    if !NAME_RE.is_match(name) {
        return Err(reject(signature, "event name is not an identifier"));
    }
    if !signature.ends_with(')') {
        return Err(reject(signature, "missing closing parenthesis"));
    }
    if !SIGNATURE_RE.is_match(signature) {
        return Err(reject(signature, "unexpected character in parameter list"));
    }

    let inner = &signature[open + 1..signature.len() - 1];
    let mut parameters = Vec::new();
    if !inner.trim().is_empty() {
        let segments = split_top_level(inner).map_err(|reason| reject(signature, reason))?;
        for (position, segment) in segments.iter().enumerate() {
            if segment.trim().is_empty() {
                return Err(reject(
                    signature,
                    format!("empty parameter at position {}", position),
                ));
            }
            let parameter = parse_parameter(segment).map_err(|reason| reject(signature, reason))?;
            parameters.push(parameter);
        }
    }

    Ok(EventSignature {
        name: name.to_string(),
        signature: signature.to_string(),
        parameters,
    })
}

/// Format check for event signatures.
///
/// A signature is valid when it matches `Name(...)` with only identifier,
/// whitespace, comma, bracket and parenthesis characters inside, and its
/// parameter list parses.
pub fn is_valid_event_signature(signature: &str) -> bool {
    SIGNATURE_RE.is_match(signature) && parse_event_signature(signature).is_ok()
}
