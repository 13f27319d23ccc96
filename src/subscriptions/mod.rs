// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event subscriptions: signature parsing, validation and the fluent builder.

mod builder;
pub mod presets;
mod signature;
mod types;
mod validators;


pub use builder::SubscriptionBuilder;
pub use presets::{
    create_auto_compound_subscription, create_cron_scheduler_subscription,
    create_cross_call_orchestrator_subscription, create_event_filter_throttle_subscription,
    create_handler_subscription, create_liquidation_guardian_subscription, AutoCompoundParams,
    AutoCompoundSubscription, CronSchedulerSubscription, CrossCallOrchestratorSubscription,
    EventFilterThrottleSubscription, LiquidationGuardianSubscription,
};
pub use signature::{
    is_valid_event_signature, parse_event_signature, EventParameter, EventSignature, ParamType,
};
pub use types::{
    AddressFilter, BlockTag, SubscriptionConfig, SubscriptionFilter, SubscriptionRequest,
};
pub use validators::{
    generate_subscription_id, is_valid_chain_id, is_valid_filter, validate_filter,
    validate_subscription_config,
};
pub use crate::utils::is_valid_address;
