// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for the SDK.
//!
//! Every diagnostic line comes from a message struct in [`messages`]. Each
//! struct implements `Display` for the human-readable text and
//! [`messages::StructuredLog`] to emit it with typed fields at a fixed level.
//!
//! Messages are organized by subsystem:
//! * `messages::subscription` - subscription building and validation
//! * `messages::config` - configuration file loading
//! * `messages::decoder` - signature registration and log decoding
//! * `messages::deployment` - contract deployment and verification
//! * `messages::handler` - handler registry bookkeeping
//!
//! # Usage
//!
//! ```rust
//! use compound_max::observability::messages::config::ConfigLoaded;
//! use compound_max::observability::messages::StructuredLog;
//!
//! ConfigLoaded {
//!     path: "configs/networks.yaml",
//!     network_count: 4,
//! }
//! .log();
//! ```

pub mod messages;
