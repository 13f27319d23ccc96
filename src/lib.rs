// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // contract deployer backends
pub mod config;        // networks + config file loading
pub mod decoders;      // log decoding
pub mod deployment;    // handler deployment + verification
pub mod errors;        // error handling
pub mod handlers;      // deployed handler bookkeeping
pub mod observability;
pub mod subscriptions; // signature parsing, validation, builders
pub mod traits;        // deployer abstraction
pub mod utils;         // hex + token unit helpers
