// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::errors::DeploymentError;
use crate::traits::{ContractDeployer, DeploymentReceipt, DeploymentRequest};

/// A deployer that always fails, for testing error propagation
pub struct FailingDeployer;

#[async_trait::async_trait]
impl ContractDeployer for FailingDeployer {
    async fn deploy(
        &self,
        _request: &DeploymentRequest,
    ) -> Result<DeploymentReceipt, DeploymentError> {
        Err(DeploymentError::Backend {
            deployer: self.name(),
            reason: "Simulated deployer failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A deployer that returns a fixed receipt and remembers what it was asked
pub struct RecordingDeployer {
    pub receipt: DeploymentReceipt,
    pub requests: Mutex<Vec<DeploymentRequest>>,
}

impl RecordingDeployer {
    pub fn new(receipt: DeploymentReceipt) -> Self {
        Self {
            receipt,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<DeploymentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContractDeployer for RecordingDeployer {
    async fn deploy(
        &self,
        request: &DeploymentRequest,
    ) -> Result<DeploymentReceipt, DeploymentError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.receipt.clone())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
