// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::consts::DEFAULT_CONFIRMATIONS;
use super::networks::{supported_networks, NetworkConfig};
use crate::errors::{ConfigError, ValidationError};
use crate::observability::messages::config::{ConfigLoaded, ConfigRejected};
use crate::observability::messages::StructuredLog;

/// Top-level SDK configuration.
///
/// Typically loaded from a YAML file. When `networks` is omitted the
/// built-in [`supported_networks`] are used.
///
/// # Example
/// ```yaml
/// default_network: sepolia
/// deployment:
///   confirmations: 2
///   verify_on_explorer: true
/// networks:
///   - name: sepolia
///     chain_id: 11155111
///     rpc_url: https://sepolia.infura.io/v3
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub default_network: Option<String>,
    #[serde(default = "supported_networks")]
    pub networks: Vec<NetworkConfig>,
    #[serde(default)]
    pub deployment: DeploymentDefaults,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            default_network: None,
            networks: supported_networks(),
            deployment: DeploymentDefaults::default(),
        }
    }
}

impl SdkConfig {
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// The configured default network, or the first listed one.
    pub fn default_network(&self) -> Result<&NetworkConfig, ConfigError> {
        match &self.default_network {
            Some(name) => self.network(name),
            None => self
                .networks
                .first()
                .ok_or_else(|| ConfigError::UnknownNetwork("<none>".to_string())),
        }
    }

    /// Every problem across all networks, plus duplicate names/chain IDs and
    /// a dangling `default_network`.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (i, network) in self.networks.iter().enumerate() {
            errors.extend(network.validate());
            let earlier = &self.networks[..i];
            if earlier.iter().any(|n| n.name == network.name) {
                errors.push(ValidationError::InvalidNetwork {
                    network: network.name.clone(),
                    reason: "duplicate network name".to_string(),
                });
            }
            if earlier.iter().any(|n| n.chain_id == network.chain_id) {
                errors.push(ValidationError::InvalidNetwork {
                    network: network.name.clone(),
                    reason: format!("chain ID {} is already configured", network.chain_id),
                });
            }
        }

        if let Some(name) = &self.default_network {
            if !self.networks.iter().any(|n| &n.name == name) {
                errors.push(ValidationError::InvalidNetwork {
                    network: name.clone(),
                    reason: "default_network is not in the networks list".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Defaults applied to every deployment unless overridden per call.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentDefaults {
    #[serde(default = "default_confirmations")]
    pub confirmations: u32,
    #[serde(default)]
    pub verify_on_explorer: bool,
    #[serde(default)]
    pub gas_limit: Option<u64>,
}

fn default_confirmations() -> u32 {
    DEFAULT_CONFIRMATIONS
}

impl Default for DeploymentDefaults {
    fn default() -> Self {
        Self {
            confirmations: DEFAULT_CONFIRMATIONS,
            verify_on_explorer: false,
            gas_limit: None,
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SdkConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: SdkConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load a config from a YAML file and reject it unless every network entry
/// is consistent.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<SdkConfig, ConfigError> {
    let cfg = load_config(&path)?;

    if let Err(errors) = cfg.validate() {
        ConfigRejected {
            path: &path.as_ref().display().to_string(),
            error_count: errors.len(),
        }
        .log();
        return Err(ConfigError::Invalid(errors));
    }

    ConfigLoaded {
        path: &path.as_ref().display().to_string(),
        network_count: cfg.networks.len(),
    }
    .log();
    Ok(cfg)
}
