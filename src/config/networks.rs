// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::errors::{ChainRole, ValidationError};
use crate::subscriptions::is_valid_chain_id;

/// A chain the SDK can deploy to.
///
/// # Example
/// ```yaml
/// name: sepolia
/// chain_id: 11155111
/// rpc_url: https://sepolia.infura.io/v3
/// explorer_url: https://sepolia.etherscan.io
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    #[serde(default)]
    pub explorer_url: Option<String>,
    #[serde(default)]
    pub explorer_api_key: Option<String>,
}

impl NetworkConfig {
    pub fn new(name: &str, chain_id: u64, rpc_url: &str) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
            rpc_url: rpc_url.to_string(),
            explorer_url: None,
            explorer_api_key: None,
        }
    }

    pub fn with_explorer(mut self, url: &str, api_key: Option<&str>) -> Self {
        self.explorer_url = Some(url.to_string());
        self.explorer_api_key = api_key.map(str::to_string);
        self
    }

    /// Every problem with this entry.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let invalid = |reason: &str| ValidationError::InvalidNetwork {
            network: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            errors.push(invalid("name is empty"));
        }
        if !is_valid_chain_id(self.chain_id) {
            errors.push(ValidationError::InvalidChainId {
                role: ChainRole::Network,
                value: self.chain_id,
            });
        }
        if !(self.rpc_url.starts_with("http://")
            || self.rpc_url.starts_with("https://")
            || self.rpc_url.starts_with("ws://")
            || self.rpc_url.starts_with("wss://"))
        {
            errors.push(invalid("rpc_url must be an http(s) or ws(s) URL"));
        }
        if self.explorer_api_key.is_some() && self.explorer_url.is_none() {
            errors.push(invalid("explorer_api_key given without explorer_url"));
        }
        errors
    }
}

/// Networks the dashboard offers out of the box.
pub fn supported_networks() -> Vec<NetworkConfig> {
    vec![
        NetworkConfig::new("ethereum", 1, "https://eth.rpc.blxrbdn.com")
            .with_explorer("https://etherscan.io", None),
        NetworkConfig::new("sepolia", 11_155_111, "https://sepolia.infura.io/v3")
            .with_explorer("https://sepolia.etherscan.io", None),
        NetworkConfig::new("arbitrum", 42_161, "https://arb1.arbitrum.io/rpc")
            .with_explorer("https://arbiscan.io", None),
        NetworkConfig::new("polygon-mumbai", 80_001, "https://rpc-mumbai.maticvigil.com")
            .with_explorer("https://mumbai.polygonscan.com", None),
    ]
}
