// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Log decoding.
//!
//! [`EventDecoder`] maps `topics[0]` hashes to registered event signatures
//! and turns raw RPC logs into [`DecodedEvent`]s or the typed reactive
//! handler records.

mod abi;
mod event_decoder;
mod types;

pub use event_decoder::{create_event_decoder, EventDecoder};
pub use types::{
    AbiInput, AbiItem, CompoundEvent, CrossCallEvent, DecodedEvent, ErrorEvent, ExecutionEvent,
    RawLog, ScheduledExecutionEvent, SuccessEvent, ThrottleEvent,
};
