// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for subscription building and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A subscription passed validation and was assigned its ID.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use compound_max::observability::messages::subscription::SubscriptionBuilt;
///
/// let msg = SubscriptionBuilt {
///     id: "0xabc_Transfer_0123456789abcdef",
///     event_name: "Transfer",
///     source_chain_id: Some(1),
///     target_chain_id: None,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SubscriptionBuilt<'a> {
    pub id: &'a str,
    pub event_name: &'a str,
    pub source_chain_id: Option<u64>,
    pub target_chain_id: Option<u64>,
}

impl Display for SubscriptionBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Built subscription '{}' for event {}", self.id, self.event_name)?;
        match (self.source_chain_id, self.target_chain_id) {
            (Some(source), Some(target)) => write!(f, " (chain {} -> {})", source, target),
            (Some(source), None) => write!(f, " (chain {})", source),
            (None, Some(target)) => write!(f, " (target chain {})", target),
            (None, None) => Ok(()),
        }
    }
}

impl StructuredLog for SubscriptionBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            subscription_id = self.id,
            event_name = self.event_name,
            source_chain_id = ?self.source_chain_id,
            target_chain_id = ?self.target_chain_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "subscription",
            span_name = name,
            subscription_id = self.id,
            event_name = self.event_name,
        )
    }
}

/// A subscription request failed validation.
///
/// # Log Level
/// `warn!` - Caller supplied unusable input
pub struct SubscriptionRejected<'a> {
    pub handler_address: &'a str,
    pub event_signature: &'a str,
    pub error_count: usize,
}

impl Display for SubscriptionRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected subscription for handler '{}' on '{}': {} validation error(s)",
            self.handler_address, self.event_signature, self.error_count
        )
    }
}

impl StructuredLog for SubscriptionRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            handler_address = self.handler_address,
            event_signature = self.event_signature,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "subscription_rejected",
            span_name = name,
            handler_address = self.handler_address,
            error_count = self.error_count,
        )
    }
}
