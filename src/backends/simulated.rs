// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use rand::Rng;

use crate::config::consts::SIMULATED_BLOCK_NUMBER;
use crate::errors::DeploymentError;
use crate::traits::{ContractDeployer, DeploymentReceipt, DeploymentRequest};

/// Deployer that never touches a chain.
///
/// Every deployment succeeds with a random address and transaction hash,
/// mined at a fixed block.
#[derive(Debug, Clone)]
pub struct SimulatedDeployer {
    block_number: u64,
}

impl Default for SimulatedDeployer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedDeployer {
    pub fn new() -> Self {
        Self {
            block_number: SIMULATED_BLOCK_NUMBER,
        }
    }

    pub fn with_block_number(block_number: u64) -> Self {
        Self { block_number }
    }
}

fn random_hex<const N: usize>() -> String {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill(&mut bytes[..]);
    format!("0x{}", hex::encode(bytes))
}

#[async_trait]
impl ContractDeployer for SimulatedDeployer {
    async fn deploy(
        &self,
        _request: &DeploymentRequest,
    ) -> Result<DeploymentReceipt, DeploymentError> {
        Ok(DeploymentReceipt {
            address: random_hex::<20>(),
            transaction_hash: random_hex::<32>(),
            block_number: self.block_number,
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::HandlerKind;
    use crate::utils::{is_valid_address, is_valid_transaction_hash};

    fn request() -> DeploymentRequest {
        DeploymentRequest {
            kind: HandlerKind::CronScheduler,
            constructor_args: vec![],
            encoded_args: String::new(),
            network: None,
            confirmations: 1,
            gas_price: None,
            gas_limit: None,
        }
    }

    #[tokio::test]
    async fn test_simulated_receipt_is_well_formed() {
        let deployer = SimulatedDeployer::new();
        let receipt = deployer.deploy(&request()).await.unwrap();
        assert!(is_valid_address(&receipt.address));
        assert!(is_valid_transaction_hash(&receipt.transaction_hash));
        assert_eq!(receipt.block_number, SIMULATED_BLOCK_NUMBER);
    }

    #[tokio::test]
    async fn test_simulated_addresses_differ() {
        let deployer = SimulatedDeployer::with_block_number(42);
        let first = deployer.deploy(&request()).await.unwrap();
        let second = deployer.deploy(&request()).await.unwrap();
        assert_ne!(first.address, second.address);
        assert_eq!(second.block_number, 42);
    }
}
