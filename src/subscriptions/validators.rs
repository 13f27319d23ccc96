// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation rules for subscription fields.
//!
//! Checks run in a fixed order (handler address, event signature, source
//! chain, target chain, filter) and every failure is collected, so a caller
//! sees all problems with a request at once.

use alloy_primitives::keccak256;

use super::signature::parse_event_signature;
use super::types::{BlockTag, SubscriptionFilter, SubscriptionRequest};
use crate::config::consts::MAX_CHAIN_ID;
use crate::errors::{ChainRole, ValidationError};
use crate::observability::messages::subscription::SubscriptionRejected;
use crate::observability::messages::StructuredLog;
use crate::utils::{is_valid_address, is_valid_topic};

/// Chain IDs are positive and fit in 32 bits.
pub fn is_valid_chain_id(chain_id: u64) -> bool {
    chain_id > 0 && chain_id <= MAX_CHAIN_ID
}

fn validate_chain_id(role: ChainRole, chain_id: Option<u64>) -> Option<ValidationError> {
    match chain_id {
        Some(value) if !is_valid_chain_id(value) => {
            Some(ValidationError::InvalidChainId { role, value })
        }
        _ => None,
    }
}

/// Every failure in a filter: bad addresses, bad topics, inverted block range.
pub fn validate_filter(filter: &SubscriptionFilter) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for address in filter.addresses() {
        if !is_valid_address(address) {
            errors.push(ValidationError::InvalidFilterAddress {
                value: address.to_string(),
            });
        }
    }

    for topic in &filter.topics {
        if !is_valid_topic(topic) {
            errors.push(ValidationError::InvalidTopic {
                value: topic.clone(),
            });
        }
    }

    if let (Some(BlockTag::Number(from_block)), Some(BlockTag::Number(to_block))) =
        (filter.from_block, filter.to_block)
    {
        if from_block > to_block {
            errors.push(ValidationError::InvalidBlockRange {
                from_block,
                to_block,
            });
        }
    }

    errors
}

/// An empty filter is valid.
pub fn is_valid_filter(filter: &SubscriptionFilter) -> bool {
    validate_filter(filter).is_empty()
}

/// Validate every field of a subscription request.
///
/// # Returns
///
/// * `Ok(())` - the request can be built
/// * `Err(Vec<ValidationError>)` - all failures, in field order
pub fn validate_subscription_config(
    request: &SubscriptionRequest,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_valid_address(&request.handler_address) {
        errors.push(ValidationError::InvalidAddress {
            field: "handler",
            value: request.handler_address.clone(),
        });
    }

    if let Err(e) = parse_event_signature(&request.event_signature) {
        errors.push(e);
    }

    errors.extend(validate_chain_id(ChainRole::Source, request.source_chain_id));
    errors.extend(validate_chain_id(ChainRole::Target, request.target_chain_id));

    if let Some(filter) = &request.filters {
        errors.extend(validate_filter(filter));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        SubscriptionRejected {
            handler_address: &request.handler_address,
            event_signature: &request.event_signature,
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

/// Deterministic subscription ID for a signature/handler pair.
///
/// `<lowercased address>_<event name>_<16 hex digits>`, the digits being the
/// first 8 bytes of keccak-256 over the signature with whitespace removed.
/// Pure: the same inputs always give the same ID, and changing either input
/// changes it.
pub fn generate_subscription_id(event_signature: &str, handler_address: &str) -> String {
    let compact: String = event_signature
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let name = compact.split('(').next().unwrap_or_default();
    let digest = keccak256(compact.as_bytes());
    format!(
        "{}_{}_{}",
        handler_address.to_lowercase(),
        name,
        hex::encode(&digest.as_slice()[..8])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscriptions::types::AddressFilter;

    const HANDLER: &str = "0x1234567890123456789012345678901234567890";
    const TOPIC: &str = "0x1234567890123456789012345678901234567890123456789012345678901234";

    fn request(signature: &str) -> SubscriptionRequest {
        SubscriptionRequest {
            handler_address: HANDLER.to_string(),
            event_signature: signature.to_string(),
            source_chain_id: Some(1),
            target_chain_id: Some(1),
            filters: None,
        }
    }

    #[test]
    fn test_chain_ids() {
        assert!(is_valid_chain_id(1));
        assert!(is_valid_chain_id(5));
        assert!(is_valid_chain_id(137));
        assert!(is_valid_chain_id(42161));
        assert!(is_valid_chain_id(11155111));
        assert!(is_valid_chain_id(0xFFFF_FFFF));
        assert!(!is_valid_chain_id(0));
        assert!(!is_valid_chain_id(999_999_999_999));
    }

    #[test]
    fn test_validate_complete_config() {
        let transfer = request("Transfer(address,address,uint256)");
        assert!(validate_subscription_config(&transfer).is_ok());

        let mut cross_chain = request("Swap(address,uint256,uint256,address)");
        cross_chain.target_chain_id = Some(137);
        assert!(validate_subscription_config(&cross_chain).is_ok());
    }

    #[test]
    fn test_errors_are_accumulated_in_field_order() {
        let req = SubscriptionRequest {
            handler_address: "not-an-address".to_string(),
            event_signature: "invalid".to_string(),
            source_chain_id: Some(0),
            target_chain_id: Some(1 << 40),
            filters: Some(SubscriptionFilter {
                topics: vec!["too-short".to_string()],
                address: Some(AddressFilter::One("invalid".to_string())),
                from_block: None,
                to_block: None,
            }),
        };
        let errors = validate_subscription_config(&req).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(matches!(errors[0], ValidationError::InvalidAddress { field: "handler", .. }));
        assert!(matches!(errors[1], ValidationError::InvalidEventSignature { .. }));
        assert!(matches!(
            errors[2],
            ValidationError::InvalidChainId { role: ChainRole::Source, value: 0 }
        ));
        assert!(matches!(
            errors[3],
            ValidationError::InvalidChainId { role: ChainRole::Target, .. }
        ));
        assert!(matches!(errors[4], ValidationError::InvalidFilterAddress { .. }));
        assert!(matches!(errors[5], ValidationError::InvalidTopic { .. }));
    }

    #[test]
    fn test_filters() {
        let mut filter = SubscriptionFilter {
            topics: vec![TOPIC.to_string()],
            ..Default::default()
        };
        assert!(is_valid_filter(&filter));

        filter.address = Some(AddressFilter::One(HANDLER.to_string()));
        assert!(is_valid_filter(&filter));

        filter.address = Some(AddressFilter::Many(vec![HANDLER.to_string(), "bad".to_string()]));
        assert!(!is_valid_filter(&filter));

        let topics_only = SubscriptionFilter {
            topics: vec!["too-short".to_string()],
            ..Default::default()
        };
        assert!(!is_valid_filter(&topics_only));

        assert!(is_valid_filter(&SubscriptionFilter::default()));
    }

    #[test]
    fn test_inverted_block_range() {
        let filter = SubscriptionFilter {
            from_block: Some(BlockTag::Number(10)),
            to_block: Some(BlockTag::Number(5)),
            ..Default::default()
        };
        assert_eq!(
            validate_filter(&filter),
            vec![ValidationError::InvalidBlockRange { from_block: 10, to_block: 5 }]
        );

        let open_ended = SubscriptionFilter {
            from_block: Some(BlockTag::Number(10)),
            to_block: Some(BlockTag::Latest),
            ..Default::default()
        };
        assert!(is_valid_filter(&open_ended));
    }

    #[test]
    fn test_subscription_id_is_deterministic() {
        let a = generate_subscription_id("Transfer(address,address,uint256)", HANDLER);
        let b = generate_subscription_id("Transfer(address,address,uint256)", HANDLER);
        assert_eq!(a, b);
        assert!(a.starts_with(&format!("{}_Transfer_", HANDLER)));
    }

    #[test]
    fn test_subscription_id_changes_with_inputs() {
        let base = generate_subscription_id("Transfer(address,address,uint256)", HANDLER);
        let other_sig = generate_subscription_id("Approval(address,address,uint256)", HANDLER);
        let other_addr = generate_subscription_id(
            "Transfer(address,address,uint256)",
            "0x2345678901234567890123456789012345678901",
        );
        assert_ne!(base, other_sig);
        assert_ne!(base, other_addr);

        // Same characters, different parameter boundaries.
        assert_ne!(
            generate_subscription_id("Ab(c)", HANDLER),
            generate_subscription_id("A(bc)", HANDLER)
        );
    }

    #[test]
    fn test_subscription_id_ignores_address_case() {
        let upper = generate_subscription_id(
            "Transfer(address,address,uint256)",
            "0xABCDEF1234567890ABCDEF1234567890ABCDEF12",
        );
        let lower = generate_subscription_id(
            "Transfer(address,address,uint256)",
            "0xabcdef1234567890abcdef1234567890abcdef12",
        );
        assert_eq!(upper, lower);
    }
}
