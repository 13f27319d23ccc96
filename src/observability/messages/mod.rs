// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `subscription` - builder and validator outcomes
//! * `config` - configuration loading
//! * `decoder` - event registry and decoding
//! * `deployment` - deployment and explorer verification
//! * `handler` - handler registry updates
//!
//! # Usage Pattern
//!
//! ```rust
//! use compound_max::observability::messages::subscription::SubscriptionRejected;
//!
//! let msg = SubscriptionRejected {
//!     handler_address: "0x0",
//!     event_signature: "Transfer(",
//!     error_count: 2,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

use tracing::Span;

pub mod config;
pub mod decoder;
pub mod deployment;
pub mod handler;
pub mod subscription;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with its fields attached.
    fn log(&self);

    /// Open a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
