// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::signature::parse_event_signature;
use super::types::{
    AddressFilter, BlockTag, SubscriptionConfig, SubscriptionFilter, SubscriptionRequest,
};
use super::validators::{generate_subscription_id, validate_subscription_config};
use crate::config::consts::ZERO_ADDRESS;
use crate::errors::SubscriptionError;
use crate::observability::messages::subscription::SubscriptionBuilt;
use crate::observability::messages::StructuredLog;

/// Fluent accumulator for a [`SubscriptionConfig`].
///
/// Setters never fail; all checks happen in [`build`](Self::build).
///
/// ```
/// use compound_max::subscriptions::SubscriptionBuilder;
///
/// let sub = SubscriptionBuilder::new("0x1234567890123456789012345678901234567890")
///     .on_event("CompoundTriggered(uint256,uint256)")
///     .from_chain(1)
///     .to_chain(1)
///     .build()
///     .unwrap();
/// assert_eq!(sub.source_chain_id(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct SubscriptionBuilder {
    request: SubscriptionRequest,
}

impl Default for SubscriptionBuilder {
    fn default() -> Self {
        Self::new(ZERO_ADDRESS)
    }
}

impl SubscriptionBuilder {
    pub fn new(handler_address: impl Into<String>) -> Self {
        Self {
            request: SubscriptionRequest {
                handler_address: handler_address.into(),
                event_signature: String::new(),
                source_chain_id: None,
                target_chain_id: None,
                filters: None,
            },
        }
    }

    /// Start from an existing request, e.g. one read from a config file.
    pub fn from_request(request: SubscriptionRequest) -> Self {
        Self { request }
    }

    pub fn on_event(mut self, signature: impl Into<String>) -> Self {
        self.request.event_signature = signature.into();
        self
    }

    pub fn from_chain(mut self, chain_id: u64) -> Self {
        self.request.source_chain_id = Some(chain_id);
        self
    }

    pub fn to_chain(mut self, chain_id: u64) -> Self {
        self.request.target_chain_id = Some(chain_id);
        self
    }

    /// Replace the whole filter.
    pub fn with_filter(mut self, filter: SubscriptionFilter) -> Self {
        self.request.filters = Some(filter);
        self
    }

    /// Append one topic to the filter.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.filter_mut().topics.push(topic.into());
        self
    }

    /// Restrict to logs emitted by a single address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.filter_mut().address = Some(AddressFilter::One(address.into()));
        self
    }

    /// Restrict to logs emitted by any of `addresses`.
    pub fn with_addresses<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses = addresses.into_iter().map(Into::into).collect();
        self.filter_mut().address = Some(AddressFilter::Many(addresses));
        self
    }

    pub fn from_block(mut self, block: BlockTag) -> Self {
        self.filter_mut().from_block = Some(block);
        self
    }

    pub fn to_block(mut self, block: BlockTag) -> Self {
        self.filter_mut().to_block = Some(block);
        self
    }

    fn filter_mut(&mut self) -> &mut SubscriptionFilter {
        self.request.filters.get_or_insert_with(SubscriptionFilter::default)
    }

    /// Validate and freeze the subscription.
    ///
    /// Fails with every validation error found; the ID is derived from the
    /// handler address and event signature.
    pub fn build(self) -> Result<SubscriptionConfig, SubscriptionError> {
        validate_subscription_config(&self.request).map_err(SubscriptionError::Invalid)?;
        let signature = parse_event_signature(&self.request.event_signature)?;

        let SubscriptionRequest {
            handler_address,
            event_signature,
            source_chain_id,
            target_chain_id,
            filters,
        } = self.request;

        let config = SubscriptionConfig {
            id: generate_subscription_id(&event_signature, &handler_address),
            topic0: signature.topic_hash(),
            handler_address,
            event_signature,
            source_chain_id,
            target_chain_id,
            filters,
        };

        SubscriptionBuilt {
            id: &config.id,
            event_name: &signature.name,
            source_chain_id: config.source_chain_id,
            target_chain_id: config.target_chain_id,
        }
        .log();

        Ok(config)
    }
}
