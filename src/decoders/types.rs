// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::utils::parse_quantity;

/// JSON-RPC quantities arrive as hex strings (`"0x1b4"`); hand-written logs
/// often use plain numbers. Both are accepted.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Number(u64),
        Text(String),
    }

    match Quantity::deserialize(deserializer)? {
        Quantity::Number(n) => Ok(n),
        Quantity::Text(text) => {
            let trimmed = text.trim();
            let value = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
                parse_quantity(&trimmed[2..])
            } else {
                trimmed.parse::<u64>().ok().map(U256::from)
            };
            value
                .and_then(|v| u64::try_from(v).ok())
                .ok_or_else(|| de::Error::custom(format!("invalid quantity '{}'", text)))
        }
    }
}

/// A log entry as returned by an RPC node (`eth_getLogs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub block_number: u64,
    pub transaction_hash: String,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub log_index: u64,
}

/// A log resolved against the decoder's signature registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedEvent {
    /// Registered signature, or `UnknownEvent`
    pub name: String,
    /// `topics[0]` of the log, empty when the log had no topics
    pub signature: String,
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    pub block_number: u64,
    pub transaction_hash: String,
    pub log_index: u64,
    /// Best-effort payload fields, keyed by parameter name
    pub decoded: Map<String, Value>,
}

impl DecodedEvent {
    pub fn is_unknown(&self) -> bool {
        self.name == crate::config::consts::UNKNOWN_EVENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEvent {
    pub action: String,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEvent {
    pub reason: String,
    pub data: String,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionEvent {
    pub step: String,
    pub result: bool,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleEvent {
    pub event_count: U256,
    pub threshold: U256,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledExecutionEvent {
    pub executed_at: U256,
    pub next_executed_at: U256,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCallEvent {
    pub call_index: U256,
    pub target: String,
    pub data: String,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

/// A completed reinvestment reported by an auto-compound handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundEvent {
    pub amount: U256,
    pub new_total: U256,
    pub address: String,
    pub block_number: u64,
    pub transaction_hash: String,
}

/// One entry of a JSON contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
    #[serde(default)]
    pub outputs: Vec<AbiInput>,
    #[serde(default)]
    pub state_mutability: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub components: Vec<AbiInput>,
    #[serde(default)]
    pub internal_type: Option<String>,
}

impl AbiInput {
    /// Type string with `tuple` expanded from `components`, e.g. `(uint256,bool)[]`.
    pub fn canonical_type(&self) -> String {
        match self.input_type.strip_prefix("tuple") {
            Some(suffix) => {
                let members = self
                    .components
                    .iter()
                    .map(AbiInput::canonical_type)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("({}){}", members, suffix)
            }
            None => self.input_type.clone(),
        }
    }
}

impl AbiItem {
    /// Human-readable signature for an `event` item, keeping names and
    /// `indexed` markers: `Transfer(address indexed from,address indexed to,uint256 value)`.
    /// `None` for non-event or unnamed items.
    pub fn event_signature(&self) -> Option<String> {
        if self.item_type != "event" {
            return None;
        }
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;
        let params = self
            .inputs
            .iter()
            .map(|input| {
                let mut param = input.canonical_type();
                if input.indexed {
                    param.push_str(" indexed");
                }
                if !input.name.is_empty() {
                    param.push(' ');
                    param.push_str(&input.name);
                }
                param
            })
            .collect::<Vec<_>>()
            .join(",");
        Some(format!("{}({})", name, params))
    }
}
