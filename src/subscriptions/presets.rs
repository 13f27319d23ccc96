// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ready-made subscriptions for each handler family.
//!
//! Every preset goes through [`SubscriptionBuilder`] and then attaches the
//! family-specific fields. Extra fields are validated alongside the builder
//! so one call reports every problem.

use alloy_primitives::U256;
use serde::Serialize;

use super::builder::SubscriptionBuilder;
use super::types::SubscriptionConfig;
use crate::config::consts::{
    COMPOUND_TRIGGERED_EVENT, DEFAULT_AUTO_COMPOUND_EVENT, DEFAULT_CRON_EVENT,
    DEFAULT_CROSS_CALL_EVENT, DEFAULT_LIQUIDATION_EVENT,
};
use crate::errors::{SubscriptionError, ValidationError};
use crate::utils::is_valid_address;

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if !is_valid_address(value) {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_positive(field: &'static str, value: u64, errors: &mut Vec<ValidationError>) {
    if value == 0 {
        errors.push(ValidationError::NotPositive { field });
    }
}

fn finish(
    builder: SubscriptionBuilder,
    mut errors: Vec<ValidationError>,
) -> Result<SubscriptionConfig, SubscriptionError> {
    match builder.build() {
        Ok(config) if errors.is_empty() => Ok(config),
        Ok(_) => Err(SubscriptionError::Invalid(errors)),
        Err(SubscriptionError::Invalid(builder_errors)) => {
            let mut all = builder_errors;
            all.append(&mut errors);
            Err(SubscriptionError::Invalid(all))
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutoCompoundParams {
    pub reward_token: String,
    pub target_vault: String,
    pub min_compound_amount: U256,
    /// Defaults to the ERC-20 `Transfer` event
    pub event_signature: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCompoundSubscription {
    #[serde(flatten)]
    pub config: SubscriptionConfig,
    pub reward_token: String,
    pub target_vault: String,
    pub min_compound_amount: U256,
}

pub fn create_auto_compound_subscription(
    handler_address: &str,
    params: AutoCompoundParams,
) -> Result<AutoCompoundSubscription, SubscriptionError> {
    let mut errors = Vec::new();
    check_address("reward token", &params.reward_token, &mut errors);
    check_address("vault", &params.target_vault, &mut errors);

    let signature = params
        .event_signature
        .unwrap_or_else(|| DEFAULT_AUTO_COMPOUND_EVENT.to_string());
    let config = finish(
        SubscriptionBuilder::new(handler_address).on_event(signature),
        errors,
    )?;

    Ok(AutoCompoundSubscription {
        config,
        reward_token: params.reward_token,
        target_vault: params.target_vault,
        min_compound_amount: params.min_compound_amount,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilterThrottleSubscription {
    #[serde(flatten)]
    pub config: SubscriptionConfig,
    pub threshold: u64,
    pub window_size: u64,
}

/// Events above `threshold` per `window_size` blocks are throttled. When
/// `source_address` is given, only its logs are watched.
pub fn create_event_filter_throttle_subscription(
    handler_address: &str,
    event_signature: &str,
    threshold: u64,
    window_size: u64,
    source_address: Option<&str>,
) -> Result<EventFilterThrottleSubscription, SubscriptionError> {
    let mut errors = Vec::new();
    check_positive("threshold", threshold, &mut errors);
    check_positive("window size", window_size, &mut errors);

    let mut builder = SubscriptionBuilder::new(handler_address).on_event(event_signature);
    if let Some(source) = source_address {
        builder = builder.with_address(source);
    }
    let config = finish(builder, errors)?;

    Ok(EventFilterThrottleSubscription {
        config,
        threshold,
        window_size,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronSchedulerSubscription {
    #[serde(flatten)]
    pub config: SubscriptionConfig,
    pub execution_interval: u64,
}

pub fn create_cron_scheduler_subscription(
    handler_address: &str,
    execution_interval: u64,
    event_signature: Option<&str>,
) -> Result<CronSchedulerSubscription, SubscriptionError> {
    let mut errors = Vec::new();
    check_positive("execution interval", execution_interval, &mut errors);

    let config = finish(
        SubscriptionBuilder::new(handler_address)
            .on_event(event_signature.unwrap_or(DEFAULT_CRON_EVENT)),
        errors,
    )?;

    Ok(CronSchedulerSubscription {
        config,
        execution_interval,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationGuardianSubscription {
    #[serde(flatten)]
    pub config: SubscriptionConfig,
    pub health_factor_threshold: U256,
    pub price_oracle_address: String,
}

pub fn create_liquidation_guardian_subscription(
    handler_address: &str,
    health_factor_threshold: U256,
    price_oracle_address: &str,
    event_signature: Option<&str>,
) -> Result<LiquidationGuardianSubscription, SubscriptionError> {
    let mut errors = Vec::new();
    check_address("oracle", price_oracle_address, &mut errors);

    let config = finish(
        SubscriptionBuilder::new(handler_address)
            .on_event(event_signature.unwrap_or(DEFAULT_LIQUIDATION_EVENT)),
        errors,
    )?;

    Ok(LiquidationGuardianSubscription {
        config,
        health_factor_threshold,
        price_oracle_address: price_oracle_address.to_string(),
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCallOrchestratorSubscription {
    #[serde(flatten)]
    pub config: SubscriptionConfig,
    pub max_queue_size: u64,
}

pub fn create_cross_call_orchestrator_subscription(
    handler_address: &str,
    max_queue_size: u64,
    event_signature: Option<&str>,
) -> Result<CrossCallOrchestratorSubscription, SubscriptionError> {
    let mut errors = Vec::new();
    check_positive("max queue size", max_queue_size, &mut errors);

    let config = finish(
        SubscriptionBuilder::new(handler_address)
            .on_event(event_signature.unwrap_or(DEFAULT_CROSS_CALL_EVENT)),
        errors,
    )?;

    Ok(CrossCallOrchestratorSubscription {
        config,
        max_queue_size,
    })
}

/// Compound monitor used by the dashboard: `CompoundTriggered` logs on one
/// chain, restricted to the reward token.
pub fn create_handler_subscription(
    handler_address: &str,
    reward_token: &str,
    chain_id: u64,
) -> Result<SubscriptionConfig, SubscriptionError> {
    SubscriptionBuilder::new(handler_address)
        .on_event(COMPOUND_TRIGGERED_EVENT)
        .from_chain(chain_id)
        .to_chain(chain_id)
        .with_address(reward_token)
        .build()
}
