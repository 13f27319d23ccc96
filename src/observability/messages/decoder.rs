// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the event decoder.
//!
//! Decoding runs once per log, so everything on that path logs at `debug!`.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A signature was added to the decoder registry.
///
/// # Log Level
/// `debug!` - Registry bookkeeping
///
/// # Example
/// ```
/// use compound_max::observability::messages::decoder::EventRegistered;
///
/// let msg = EventRegistered {
///     signature: "Transfer(address,address,uint256)",
///     topic_hash: "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct EventRegistered<'a> {
    pub signature: &'a str,
    pub topic_hash: &'a str,
}

impl Display for EventRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registered event {} as {}", self.signature, self.topic_hash)
    }
}

impl StructuredLog for EventRegistered<'_> {
    fn log(&self) {
        tracing::debug!(signature = self.signature, topic_hash = self.topic_hash, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "event_registered",
            span_name = name,
            signature = self.signature,
            topic_hash = self.topic_hash,
        )
    }
}

/// A built-in or family signature could not be registered.
///
/// # Log Level
/// `warn!` - The decoder keeps working without this event
pub struct SignatureRejected<'a> {
    pub signature: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SignatureRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping event signature '{}': {}", self.signature, self.error)
    }
}

impl StructuredLog for SignatureRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            signature = self.signature,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("signature_rejected", span_name = name, signature = self.signature)
    }
}

/// A log's `topics[0]` is not in the registry.
///
/// # Log Level
/// `debug!` - Expected for logs from unrelated contracts
pub struct UnknownEventSkipped<'a> {
    pub topic: &'a str,
    pub address: &'a str,
}

impl Display for UnknownEventSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.topic.is_empty() {
            write!(f, "Log from {} has no topics", self.address)
        } else {
            write!(f, "Unknown event {} from {}", self.topic, self.address)
        }
    }
}

impl StructuredLog for UnknownEventSkipped<'_> {
    fn log(&self) {
        tracing::debug!(topic = self.topic, address = self.address, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unknown_event",
            span_name = name,
            topic = self.topic,
            address = self.address,
        )
    }
}

/// The data section of a known event is not valid ABI; best-effort
/// extraction is used instead.
///
/// # Log Level
/// `debug!` - Common for handlers that emit raw bytes
pub struct PayloadDecodeFallback<'a> {
    pub event: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PayloadDecodeFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Falling back to raw payload for {}: {}",
            self.event, self.error
        )
    }
}

impl StructuredLog for PayloadDecodeFallback<'_> {
    fn log(&self) {
        tracing::debug!(event = self.event, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("payload_fallback", span_name = name, event = self.event)
    }
}
