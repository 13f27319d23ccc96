// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the handler registry.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A handler was added to the registry.
///
/// # Log Level
/// `info!` - Important operational event
pub struct HandlerRegistered<'a> {
    pub address: &'a str,
    pub name: &'a str,
    pub network: &'a str,
}

impl Display for HandlerRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered handler '{}' at {} on {}",
            self.name, self.address, self.network
        )
    }
}

impl StructuredLog for HandlerRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            address = self.address,
            name = self.name,
            network = self.network,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("handler", span_name = name, address = self.address)
    }
}

/// A handler was removed from the registry.
///
/// # Log Level
/// `info!` - Important operational event
pub struct HandlerRemoved<'a> {
    pub address: &'a str,
}

impl Display for HandlerRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Removed handler at {}", self.address)
    }
}

impl StructuredLog for HandlerRemoved<'_> {
    fn log(&self) {
        tracing::info!(address = self.address, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("handler_removed", span_name = name, address = self.address)
    }
}

/// A compound was recorded against a handler's stats.
///
/// # Log Level
/// `debug!` - Per-event bookkeeping
pub struct CompoundRecorded<'a> {
    pub address: &'a str,
    pub total_compounds: u64,
    pub net_yield: f64,
}

impl Display for CompoundRecorded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler {} compounded (#{}), net yield {:.2}",
            self.address, self.total_compounds, self.net_yield
        )
    }
}

impl StructuredLog for CompoundRecorded<'_> {
    fn log(&self) {
        tracing::debug!(
            address = self.address,
            total_compounds = self.total_compounds,
            net_yield = self.net_yield,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("compound_recorded", span_name = name, address = self.address)
    }
}
