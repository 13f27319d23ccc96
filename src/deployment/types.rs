// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_MAX_CALL_DATA_SIZE;
use crate::config::{DeploymentDefaults, NetworkConfig};
use crate::errors::ValidationError;
use crate::utils::is_valid_address;

/// The reactive handler contract families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerKind {
    EventFilterThrottle,
    AutoCompound,
    CronScheduler,
    LiquidationGuardian,
    CrossCallOrchestrator,
    UpgradeableProxy,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 6] = [
        HandlerKind::EventFilterThrottle,
        HandlerKind::AutoCompound,
        HandlerKind::CronScheduler,
        HandlerKind::LiquidationGuardian,
        HandlerKind::CrossCallOrchestrator,
        HandlerKind::UpgradeableProxy,
    ];

    /// Solidity contract name, used for explorer verification.
    pub fn contract_name(&self) -> &'static str {
        match self {
            HandlerKind::EventFilterThrottle => "EventFilterThrottle",
            HandlerKind::AutoCompound => "AutoCompoundHandler",
            HandlerKind::CronScheduler => "CronLikeScheduler",
            HandlerKind::LiquidationGuardian => "LiquidationGuardian",
            HandlerKind::CrossCallOrchestrator => "CrossCallOrchestrator",
            HandlerKind::UpgradeableProxy => "UpgradeableReactiveProxy",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            HandlerKind::EventFilterThrottle => "event-filter-throttle",
            HandlerKind::AutoCompound => "auto-compound",
            HandlerKind::CronScheduler => "cron-scheduler",
            HandlerKind::LiquidationGuardian => "liquidation-guardian",
            HandlerKind::CrossCallOrchestrator => "cross-call-orchestrator",
            HandlerKind::UpgradeableProxy => "upgradeable-proxy",
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Accepts the kebab-case slug (`auto-compound`) or the variant name
/// (`AutoCompound`), case-insensitively.
impl FromStr for HandlerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], "");
        HandlerKind::ALL
            .into_iter()
            .find(|kind| kind.slug().replace('-', "") == wanted)
            .ok_or_else(|| format!("unknown handler kind '{}'", s))
    }
}

/// One constructor argument, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConstructorArg {
    Address(String),
    Uint(U256),
    /// Optional owner; `None` lets the contract default to the deployer
    Owner(Option<String>),
}

/// Shared behaviour of the per-family deployment configs.
pub trait HandlerConfig: Serialize {
    const KIND: HandlerKind;

    /// Every problem with this config.
    fn validate(&self) -> Vec<ValidationError>;

    fn constructor_args(&self) -> Vec<ConstructorArg>;
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if !is_valid_address(value) {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_owner(errors: &mut Vec<ValidationError>, owner: &Option<String>) {
    if let Some(owner) = owner {
        check_address(errors, "owner", owner);
    }
}

fn check_positive(errors: &mut Vec<ValidationError>, field: &'static str, value: u64) {
    if value == 0 {
        errors.push(ValidationError::NotPositive { field });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilterThrottleConfig {
    pub max_events_per_window: u64,
    pub window_size_blocks: u64,
    #[serde(default)]
    pub initial_owner: Option<String>,
}

impl HandlerConfig for EventFilterThrottleConfig {
    const KIND: HandlerKind = HandlerKind::EventFilterThrottle;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_positive(&mut errors, "max_events_per_window", self.max_events_per_window);
        check_positive(&mut errors, "window_size_blocks", self.window_size_blocks);
        check_owner(&mut errors, &self.initial_owner);
        errors
    }

    fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Uint(U256::from(self.max_events_per_window)),
            ConstructorArg::Uint(U256::from(self.window_size_blocks)),
            ConstructorArg::Owner(self.initial_owner.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCompoundConfig {
    pub vault_address: String,
    pub token_address: String,
    /// Minimum reward balance, in token base units, before compounding
    pub compound_threshold: U256,
    #[serde(default)]
    pub initial_owner: Option<String>,
}

impl HandlerConfig for AutoCompoundConfig {
    const KIND: HandlerKind = HandlerKind::AutoCompound;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_address(&mut errors, "vault", &self.vault_address);
        check_address(&mut errors, "token", &self.token_address);
        check_owner(&mut errors, &self.initial_owner);
        errors
    }

    fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Address(self.vault_address.clone()),
            ConstructorArg::Address(self.token_address.clone()),
            ConstructorArg::Uint(self.compound_threshold),
            ConstructorArg::Owner(self.initial_owner.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronSchedulerConfig {
    pub interval_blocks: u64,
    #[serde(default)]
    pub initial_owner: Option<String>,
}

impl HandlerConfig for CronSchedulerConfig {
    const KIND: HandlerKind = HandlerKind::CronScheduler;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_positive(&mut errors, "interval_blocks", self.interval_blocks);
        check_owner(&mut errors, &self.initial_owner);
        errors
    }

    fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Uint(U256::from(self.interval_blocks)),
            ConstructorArg::Owner(self.initial_owner.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationGuardianConfig {
    pub oracle_address: String,
    pub health_factor_threshold: U256,
    pub liquidation_threshold: U256,
    #[serde(default)]
    pub initial_owner: Option<String>,
}

impl HandlerConfig for LiquidationGuardianConfig {
    const KIND: HandlerKind = HandlerKind::LiquidationGuardian;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_address(&mut errors, "oracle", &self.oracle_address);
        check_owner(&mut errors, &self.initial_owner);
        errors
    }

    fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Address(self.oracle_address.clone()),
            ConstructorArg::Uint(self.health_factor_threshold),
            ConstructorArg::Uint(self.liquidation_threshold),
            ConstructorArg::Owner(self.initial_owner.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCallOrchestratorConfig {
    pub max_queue_size: u64,
    /// Defaults to 10000 bytes
    #[serde(default)]
    pub max_call_data_size: Option<u64>,
    #[serde(default)]
    pub initial_owner: Option<String>,
}

impl CrossCallOrchestratorConfig {
    pub fn effective_max_call_data_size(&self) -> u64 {
        self.max_call_data_size.unwrap_or(DEFAULT_MAX_CALL_DATA_SIZE)
    }
}

impl HandlerConfig for CrossCallOrchestratorConfig {
    const KIND: HandlerKind = HandlerKind::CrossCallOrchestrator;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_positive(&mut errors, "max_queue_size", self.max_queue_size);
        if let Some(size) = self.max_call_data_size {
            check_positive(&mut errors, "max_call_data_size", size);
        }
        check_owner(&mut errors, &self.initial_owner);
        errors
    }

    fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Uint(U256::from(self.max_queue_size)),
            ConstructorArg::Uint(U256::from(self.effective_max_call_data_size())),
            ConstructorArg::Owner(self.initial_owner.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeableProxyConfig {
    pub implementation_address: String,
    pub admin_address: String,
    #[serde(default)]
    pub initial_owner: Option<String>,
}

impl HandlerConfig for UpgradeableProxyConfig {
    const KIND: HandlerKind = HandlerKind::UpgradeableProxy;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_address(&mut errors, "implementation", &self.implementation_address);
        check_address(&mut errors, "admin", &self.admin_address);
        check_owner(&mut errors, &self.initial_owner);
        errors
    }

    fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Address(self.implementation_address.clone()),
            ConstructorArg::Address(self.admin_address.clone()),
            ConstructorArg::Owner(self.initial_owner.clone()),
        ]
    }
}

/// Where and how to deploy. Without a network the result reports
/// `unknown` and verification is never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentOptions {
    #[serde(default)]
    pub network: Option<NetworkConfig>,
    #[serde(default)]
    pub verify_on_explorer: bool,
    #[serde(default = "default_confirmations")]
    pub confirmations: u32,
    #[serde(default)]
    pub gas_price: Option<U256>,
    #[serde(default)]
    pub gas_limit: Option<u64>,
}

fn default_confirmations() -> u32 {
    crate::config::consts::DEFAULT_CONFIRMATIONS
}

impl Default for DeploymentOptions {
    fn default() -> Self {
        Self {
            network: None,
            verify_on_explorer: false,
            confirmations: default_confirmations(),
            gas_price: None,
            gas_limit: None,
        }
    }
}

impl DeploymentOptions {
    pub fn for_network(network: NetworkConfig) -> Self {
        Self {
            network: Some(network),
            ..Self::default()
        }
    }

    /// Options for `network` seeded from the config file's deployment defaults.
    pub fn from_defaults(network: NetworkConfig, defaults: &DeploymentDefaults) -> Self {
        Self {
            network: Some(network),
            verify_on_explorer: defaults.verify_on_explorer,
            confirmations: defaults.confirmations,
            gas_price: None,
            gas_limit: defaults.gas_limit,
        }
    }

    pub fn network_name(&self) -> &str {
        self.network
            .as_ref()
            .map(|network| network.name.as_str())
            .unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Success,
    Failure,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOptions {
    pub address: String,
    pub constructor_args: Vec<ConstructorArg>,
    pub contract_name: Option<String>,
    pub explorer_api_url: Option<String>,
    pub explorer_api_key: Option<String>,
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub status: VerificationStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A deployed handler contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerDeploymentResult {
    #[serde(rename = "type")]
    pub kind: HandlerKind,
    pub address: String,
    pub transaction_hash: String,
    pub block_number: u64,
    pub constructor_args: Vec<ConstructorArg>,
    pub deployment_time: DateTime<Utc>,
    pub network: String,
    /// The config the handler was deployed with
    pub initialization_data: serde_json::Value,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationResult>,
}

/// The `{success, data | error}` envelope returned to callers that want a
/// serializable result instead of a `Result`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentOutcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T, E: fmt::Display> From<Result<T, E>> for DeploymentOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn test_handler_kind_parsing() {
        assert_eq!("auto-compound".parse::<HandlerKind>().unwrap(), HandlerKind::AutoCompound);
        assert_eq!("AutoCompound".parse::<HandlerKind>().unwrap(), HandlerKind::AutoCompound);
        assert_eq!(
            "cross_call_orchestrator".parse::<HandlerKind>().unwrap(),
            HandlerKind::CrossCallOrchestrator
        );
        assert!("vault".parse::<HandlerKind>().is_err());
        for kind in HandlerKind::ALL {
            assert_eq!(kind.to_string().parse::<HandlerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_contract_names() {
        assert_eq!(HandlerKind::AutoCompound.contract_name(), "AutoCompoundHandler");
        assert_eq!(HandlerKind::CronScheduler.contract_name(), "CronLikeScheduler");
        assert_eq!(
            HandlerKind::UpgradeableProxy.contract_name(),
            "UpgradeableReactiveProxy"
        );
    }

    #[test]
    fn test_auto_compound_validation() {
        let config = AutoCompoundConfig {
            vault_address: "invalid".to_string(),
            token_address: ADDR.to_string(),
            compound_threshold: U256::from(1000u64),
            initial_owner: Some("0x12".to_string()),
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::InvalidAddress { field: "vault", .. }));
        assert!(matches!(errors[1], ValidationError::InvalidAddress { field: "owner", .. }));
    }

    #[test]
    fn test_positive_counts() {
        let config = CronSchedulerConfig {
            interval_blocks: 0,
            initial_owner: None,
        };
        assert_eq!(
            config.validate(),
            vec![ValidationError::NotPositive { field: "interval_blocks" }]
        );
        let throttle = EventFilterThrottleConfig {
            max_events_per_window: 0,
            window_size_blocks: 0,
            initial_owner: None,
        };
        assert_eq!(throttle.validate().len(), 2);
    }

    #[test]
    fn test_cross_call_default_call_data_size() {
        let config = CrossCallOrchestratorConfig {
            max_queue_size: 10,
            max_call_data_size: None,
            initial_owner: None,
        };
        assert!(config.validate().is_empty());
        assert_eq!(
            config.constructor_args()[1],
            ConstructorArg::Uint(U256::from(10_000u64))
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: AutoCompoundConfig = serde_json::from_str(&format!(
            r#"{{"vaultAddress": "{ADDR}", "tokenAddress": "{ADDR}", "compoundThreshold": "0x3e8"}}"#
        ))
        .unwrap();
        assert_eq!(config.compound_threshold, U256::from(1000u64));
        assert_eq!(config.initial_owner, None);
    }

    #[test]
    fn test_outcome_shape() {
        let ok: DeploymentOutcome<u64> = Ok::<u64, String>(7).into();
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"success": true, "data": 7})
        );
        let failed: DeploymentOutcome<u64> = Err::<u64, _>("boom").into();
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"success": false, "error": "boom"})
        );
    }

    #[test]
    fn test_options_network_name() {
        assert_eq!(DeploymentOptions::default().network_name(), "unknown");
        assert_eq!(DeploymentOptions::default().confirmations, 1);
        let options = DeploymentOptions::for_network(NetworkConfig::new(
            "sepolia",
            11155111,
            "https://rpc.sepolia.org",
        ));
        assert_eq!(options.network_name(), "sepolia");
    }
}
