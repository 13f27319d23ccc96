// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Which side of a subscription a chain ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainRole {
    Source,
    Target,
    Network,
}

impl fmt::Display for ChainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainRole::Source => write!(f, "source"),
            ChainRole::Target => write!(f, "target"),
            ChainRole::Network => write!(f, "network"),
        }
    }
}

/// Errors raised while checking user-supplied addresses, signatures and ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field expected a `0x`-prefixed 40 hex digit address
    InvalidAddress {
        /// Name of the offending field, e.g. `handler`
        field: &'static str,
        value: String,
    },
    /// An address inside a subscription filter is malformed
    InvalidFilterAddress { value: String },
    /// A filter topic is not a 32-byte hex word
    InvalidTopic { value: String },
    /// The event signature could not be parsed
    InvalidEventSignature {
        signature: String,
        /// Short description of what is wrong
        reason: String,
    },
    /// A chain ID is zero or exceeds the 32-bit range
    InvalidChainId { role: ChainRole, value: u64 },
    /// `from_block` is after `to_block`
    InvalidBlockRange { from_block: u64, to_block: u64 },
    /// A count or interval that must be strictly positive
    NotPositive { field: &'static str },
    /// A token amount or threshold that could not be read as an integer
    InvalidAmount { field: &'static str, value: String },
    /// Network configuration problems
    InvalidNetwork { network: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAddress { field, value } => {
                write!(f, "Invalid {} address: '{}'", field, value)
            }
            ValidationError::InvalidFilterAddress { value } => {
                write!(f, "Invalid address in filter: '{}'", value)
            }
            ValidationError::InvalidTopic { value } => {
                write!(f, "Invalid topic in filter: '{}'", value)
            }
            ValidationError::InvalidEventSignature { signature, reason } => {
                write!(
                    f,
                    "Invalid event signature format: '{}' ({})",
                    signature, reason
                )
            }
            ValidationError::InvalidChainId { role, value } => {
                write!(f, "Invalid {} chain ID: {}", role, value)
            }
            ValidationError::InvalidBlockRange {
                from_block,
                to_block,
            } => {
                write!(
                    f,
                    "Invalid block range: from_block {} is after to_block {}",
                    from_block, to_block
                )
            }
            ValidationError::NotPositive { field } => {
                write!(f, "{} must be positive", field)
            }
            ValidationError::InvalidAmount { field, value } => {
                write!(f, "Invalid {} amount: '{}'", field, value)
            }
            ValidationError::InvalidNetwork { network, reason } => {
                write!(f, "Network '{}' is misconfigured: {}", network, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
