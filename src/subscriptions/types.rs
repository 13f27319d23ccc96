// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::decoders::RawLog;

/// `address` in a filter may be a single address or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressFilter {
    One(String),
    Many(Vec<String>),
}

impl AddressFilter {
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            AddressFilter::One(address) => vec![address.as_str()],
            AddressFilter::Many(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }
}

/// A block bound: a concrete number or `"latest"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlockTag", into = "RawBlockTag")]
pub enum BlockTag {
    Number(u64),
    Latest,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawBlockTag {
    Number(u64),
    Text(String),
}

impl TryFrom<RawBlockTag> for BlockTag {
    type Error = String;

    fn try_from(raw: RawBlockTag) -> Result<Self, Self::Error> {
        match raw {
            RawBlockTag::Number(n) => Ok(BlockTag::Number(n)),
            RawBlockTag::Text(s) if s == "latest" => Ok(BlockTag::Latest),
            RawBlockTag::Text(s) => Err(format!("unknown block tag '{}'", s)),
        }
    }
}

impl From<BlockTag> for RawBlockTag {
    fn from(tag: BlockTag) -> Self {
        match tag {
            BlockTag::Number(n) => RawBlockTag::Number(n),
            BlockTag::Latest => RawBlockTag::Text("latest".to_string()),
        }
    }
}

/// Optional narrowing of which logs a subscription receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockTag>,
}

impl SubscriptionFilter {
    pub fn addresses(&self) -> Vec<&str> {
        self.address
            .as_ref()
            .map(AddressFilter::addresses)
            .unwrap_or_default()
    }
}

/// Unvalidated subscription fields, as accumulated by the builder or read
/// from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub handler_address: String,
    pub event_signature: String,
    #[serde(default)]
    pub source_chain_id: Option<u64>,
    #[serde(default)]
    pub target_chain_id: Option<u64>,
    #[serde(default)]
    pub filters: Option<SubscriptionFilter>,
}

/// A validated event watch for one handler. Immutable once built.
///
/// Only [`SubscriptionBuilder::build`](super::SubscriptionBuilder::build)
/// produces one, so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionConfig {
    pub(crate) id: String,
    pub(crate) handler_address: String,
    pub(crate) event_signature: String,
    pub(crate) topic0: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) source_chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) target_chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) filters: Option<SubscriptionFilter>,
}

impl SubscriptionConfig {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn handler_address(&self) -> &str {
        &self.handler_address
    }

    pub fn event_signature(&self) -> &str {
        &self.event_signature
    }

    /// Topic hash that logs of this event carry in `topics[0]`.
    pub fn topic0(&self) -> &str {
        &self.topic0
    }

    pub fn source_chain_id(&self) -> Option<u64> {
        self.source_chain_id
    }

    pub fn target_chain_id(&self) -> Option<u64> {
        self.target_chain_id
    }

    pub fn filters(&self) -> Option<&SubscriptionFilter> {
        self.filters.as_ref()
    }

    /// The fields this config was built from, for re-validation or editing.
    pub fn to_request(&self) -> SubscriptionRequest {
        SubscriptionRequest {
            handler_address: self.handler_address.clone(),
            event_signature: self.event_signature.clone(),
            source_chain_id: self.source_chain_id,
            target_chain_id: self.target_chain_id,
            filters: self.filters.clone(),
        }
    }

    /// Whether a raw log belongs to this subscription.
    ///
    /// `topics[0]` must equal the event's topic hash. Filter addresses, when
    /// present, must include the emitting address. Every filter topic must
    /// appear among the log's indexed topics. Numeric block bounds are
    /// inclusive.
    pub fn matches_log(&self, log: &RawLog) -> bool {
        let Some(topic0) = log.topics.first() else {
            return false;
        };
        if !topic0.eq_ignore_ascii_case(&self.topic0) {
            return false;
        }

        let Some(filter) = &self.filters else {
            return true;
        };

        let addresses = filter.addresses();
        if !addresses.is_empty()
            && !addresses
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&log.address))
        {
            return false;
        }

        let indexed = &log.topics[1..];
        if !filter
            .topics
            .iter()
            .all(|wanted| indexed.iter().any(|t| t.eq_ignore_ascii_case(wanted)))
        {
            return false;
        }

        if let Some(BlockTag::Number(from)) = filter.from_block {
            if log.block_number < from {
                return false;
            }
        }
        if let Some(BlockTag::Number(to)) = filter.to_block {
            if log.block_number > to {
                return false;
            }
        }
        true
    }
}
