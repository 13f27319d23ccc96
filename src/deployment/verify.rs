// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Explorer verification and constructor argument encoding.

use alloy_primitives::U256;

use crate::deployment::types::{
    ConstructorArg, VerificationOptions, VerificationResult, VerificationStatus,
};
use crate::utils::is_valid_address;

pub use crate::utils::is_valid_transaction_hash;

const DEFAULT_CONTRACT_NAME: &str = "Handler";

/// Submit a contract for source verification.
///
/// Submission is recorded as `Pending` with the explorer page for the
/// address; the explorer API itself is not called.
pub async fn verify_contract(options: &VerificationOptions) -> VerificationResult {
    let (Some(explorer_url), Some(_api_key)) = (
        options.explorer_api_url.as_deref().filter(|url| !url.is_empty()),
        options.explorer_api_key.as_deref().filter(|key| !key.is_empty()),
    ) else {
        return VerificationResult {
            status: VerificationStatus::Failure,
            message: "Explorer API URL or API key is missing".to_string(),
            url: None,
        };
    };

    if !is_valid_address(&options.address) {
        return VerificationResult {
            status: VerificationStatus::Failure,
            message: "Invalid contract address".to_string(),
            url: None,
        };
    }

    let contract_name = options
        .contract_name
        .as_deref()
        .unwrap_or(DEFAULT_CONTRACT_NAME);
    VerificationResult {
        status: VerificationStatus::Pending,
        message: format!(
            "Contract {} at {} verification submitted",
            contract_name, options.address
        ),
        url: Some(format!(
            "{}/address/{}",
            explorer_url.trim_end_matches('/'),
            options.address
        )),
    }
}

fn address_word(address: &str) -> String {
    let digits = address.strip_prefix("0x").unwrap_or(address);
    format!("{:0>64}", digits.to_lowercase())
}

fn uint_word(value: &U256) -> String {
    hex::encode(value.to_be_bytes::<32>())
}

/// Hex encoding of constructor arguments for explorer submission, without
/// a `0x` prefix. Addresses and integers become 32-byte words, text is
/// JSON-quoted and an absent owner is the zero word.
pub fn encode_constructor_args(args: &[ConstructorArg]) -> String {
    args.iter()
        .map(|arg| match arg {
            ConstructorArg::Address(address) => address_word(address),
            ConstructorArg::Uint(value) => uint_word(value),
            ConstructorArg::Owner(Some(owner)) => address_word(owner),
            ConstructorArg::Owner(None) => "0".repeat(64),
        })
        .collect()
}
