// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::Utc;
use tracing::Instrument;

use crate::deployment::types::{
    AutoCompoundConfig, CronSchedulerConfig, CrossCallOrchestratorConfig, DeploymentOptions,
    EventFilterThrottleConfig, HandlerConfig, HandlerDeploymentResult, LiquidationGuardianConfig,
    UpgradeableProxyConfig, VerificationOptions, VerificationResult, VerificationStatus,
};
use crate::deployment::verify::{encode_constructor_args, verify_contract};
use crate::errors::DeploymentError;
use crate::observability::messages::deployment::{
    DeploymentCompleted, DeploymentFailed, DeploymentRejected, DeploymentStarted,
    VerificationFinished,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ContractDeployer, DeploymentReceipt, DeploymentRequest};
use crate::utils::{is_valid_address, is_valid_transaction_hash};

/// Validate `config`, deploy it through `deployer` and, when requested,
/// submit the result for explorer verification.
///
/// Nothing reaches the deployer unless every validation check passes.
/// Verification problems are reported on the result, never as an error.
pub async fn deploy_handler<C: HandlerConfig>(
    deployer: &dyn ContractDeployer,
    config: &C,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    let kind = C::KIND;
    let contract = kind.contract_name();

    let errors = config.validate();
    if !errors.is_empty() {
        DeploymentRejected {
            contract,
            error_count: errors.len(),
        }
        .log();
        return Err(DeploymentError::InvalidConfig(errors));
    }

    let constructor_args = config.constructor_args();
    let request = DeploymentRequest {
        kind,
        encoded_args: encode_constructor_args(&constructor_args),
        constructor_args,
        network: options.network.clone(),
        confirmations: options.confirmations,
        gas_price: options.gas_price,
        gas_limit: options.gas_limit,
    };

    let started = DeploymentStarted {
        contract,
        network: options.network_name(),
        deployer: deployer.name(),
    };
    started.log();

    let receipt = deployer
        .deploy(&request)
        .instrument(started.span("deploy_handler"))
        .await
        .and_then(|receipt| check_receipt(deployer.name(), receipt))
        .map_err(|err| {
            DeploymentFailed {
                contract,
                error: &err,
            }
            .log();
            err
        })?;

    DeploymentCompleted {
        contract,
        address: &receipt.address,
        transaction_hash: &receipt.transaction_hash,
        block_number: receipt.block_number,
    }
    .log();

    let verification = if options.verify_on_explorer {
        Some(submit_verification(&receipt, &request, options).await)
    } else {
        None
    };

    Ok(HandlerDeploymentResult {
        kind,
        address: receipt.address,
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        constructor_args: request.constructor_args,
        deployment_time: Utc::now(),
        network: options.network_name().to_string(),
        initialization_data: serde_json::to_value(config).unwrap_or_default(),
        verified: verification
            .as_ref()
            .is_some_and(|v| v.status == VerificationStatus::Success),
        verification,
    })
}

fn check_receipt(
    deployer: &'static str,
    receipt: DeploymentReceipt,
) -> Result<DeploymentReceipt, DeploymentError> {
    if !is_valid_address(&receipt.address)
        || !is_valid_transaction_hash(&receipt.transaction_hash)
    {
        return Err(DeploymentError::Backend {
            deployer,
            reason: format!(
                "malformed receipt (address '{}', transaction '{}')",
                receipt.address, receipt.transaction_hash
            ),
        });
    }
    Ok(receipt)
}

async fn submit_verification(
    receipt: &DeploymentReceipt,
    request: &DeploymentRequest,
    options: &DeploymentOptions,
) -> VerificationResult {
    let network = options.network.as_ref();
    let result = verify_contract(&VerificationOptions {
        address: receipt.address.clone(),
        constructor_args: request.constructor_args.clone(),
        contract_name: Some(request.kind.contract_name().to_string()),
        explorer_api_url: network.and_then(|n| n.explorer_url.clone()),
        explorer_api_key: network.and_then(|n| n.explorer_api_key.clone()),
        chain_id: network.map(|n| n.chain_id),
    })
    .await;

    VerificationFinished {
        address: &receipt.address,
        succeeded: result.status != VerificationStatus::Failure,
        message: &result.message,
    }
    .log();
    result
}

pub async fn deploy_event_filter_throttle(
    deployer: &dyn ContractDeployer,
    config: &EventFilterThrottleConfig,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    deploy_handler(deployer, config, options).await
}

pub async fn deploy_auto_compound_handler(
    deployer: &dyn ContractDeployer,
    config: &AutoCompoundConfig,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    deploy_handler(deployer, config, options).await
}

pub async fn deploy_cron_like_scheduler(
    deployer: &dyn ContractDeployer,
    config: &CronSchedulerConfig,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    deploy_handler(deployer, config, options).await
}

pub async fn deploy_liquidation_guardian(
    deployer: &dyn ContractDeployer,
    config: &LiquidationGuardianConfig,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    deploy_handler(deployer, config, options).await
}

pub async fn deploy_cross_call_orchestrator(
    deployer: &dyn ContractDeployer,
    config: &CrossCallOrchestratorConfig,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    deploy_handler(deployer, config, options).await
}

pub async fn deploy_upgradeable_reactive_proxy(
    deployer: &dyn ContractDeployer,
    config: &UpgradeableProxyConfig,
    options: &DeploymentOptions,
) -> Result<HandlerDeploymentResult, DeploymentError> {
    deploy_handler(deployer, config, options).await
}
