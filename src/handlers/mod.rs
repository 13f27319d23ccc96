// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deployed auto-compound handlers and their yield statistics.

mod registry;
mod types;

pub use registry::HandlerRegistry;
pub use types::{Handler, HandlerProfile, HandlerStats, HandlerStatus, HandlerUpdate};
