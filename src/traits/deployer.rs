// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::config::NetworkConfig;
use crate::deployment::{ConstructorArg, HandlerKind};
use crate::errors::DeploymentError;

/// Everything a backend needs to put one handler contract on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub kind: HandlerKind,
    pub constructor_args: Vec<ConstructorArg>,
    /// `constructor_args` as hex words, without `0x`
    pub encoded_args: String,
    pub network: Option<NetworkConfig>,
    pub confirmations: u32,
    pub gas_price: Option<U256>,
    pub gas_limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub address: String,
    pub transaction_hash: String,
    pub block_number: u64,
}

#[async_trait]
pub trait ContractDeployer: Send + Sync {
    async fn deploy(
        &self,
        request: &DeploymentRequest,
    ) -> Result<DeploymentReceipt, DeploymentError>;

    fn name(&self) -> &'static str;
}
