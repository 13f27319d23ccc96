// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Handler contract deployment.
//!
//! Each `deploy_*` function validates its family's config, hands a
//! [`DeploymentRequest`](crate::traits::DeploymentRequest) to a
//! [`ContractDeployer`](crate::traits::ContractDeployer) and optionally
//! submits the new contract for explorer verification.
//!
//! ```rust
//! use compound_max::backends::SimulatedDeployer;
//! use compound_max::deployment::{deploy_cron_like_scheduler, CronSchedulerConfig, DeploymentOptions};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let result = runtime.block_on(deploy_cron_like_scheduler(
//!     &SimulatedDeployer::new(),
//!     &CronSchedulerConfig { interval_blocks: 100, initial_owner: None },
//!     &DeploymentOptions::default(),
//! ));
//! assert!(result.is_ok());
//! ```

mod deployer;
mod types;
mod verify;


pub use deployer::{
    deploy_auto_compound_handler, deploy_cron_like_scheduler, deploy_cross_call_orchestrator,
    deploy_event_filter_throttle, deploy_handler, deploy_liquidation_guardian,
    deploy_upgradeable_reactive_proxy,
};
pub use types::{
    AutoCompoundConfig, ConstructorArg, CronSchedulerConfig, CrossCallOrchestratorConfig,
    DeploymentOptions, DeploymentOutcome, EventFilterThrottleConfig, HandlerConfig,
    HandlerDeploymentResult, HandlerKind, LiquidationGuardianConfig, UpgradeableProxyConfig,
    VerificationOptions, VerificationResult, VerificationStatus,
};
pub use verify::{encode_constructor_args, is_valid_transaction_hash, verify_contract};
