// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for handler deployment and explorer verification.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Deployment of a handler contract is starting.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use compound_max::observability::messages::deployment::DeploymentStarted;
///
/// let msg = DeploymentStarted {
///     contract: "AutoCompoundHandler",
///     network: "sepolia",
///     deployer: "simulated",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DeploymentStarted<'a> {
    pub contract: &'a str,
    pub network: &'a str,
    pub deployer: &'a str,
}

impl Display for DeploymentStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Deploying {} to {} via {} deployer",
            self.contract, self.network, self.deployer
        )
    }
}

impl StructuredLog for DeploymentStarted<'_> {
    fn log(&self) {
        tracing::info!(
            contract = self.contract,
            network = self.network,
            deployer = self.deployer,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "deployment",
            span_name = name,
            contract = self.contract,
            network = self.network,
            deployer = self.deployer,
        )
    }
}

/// A handler contract was deployed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DeploymentCompleted<'a> {
    pub contract: &'a str,
    pub address: &'a str,
    pub transaction_hash: &'a str,
    pub block_number: u64,
}

impl Display for DeploymentCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Deployed {} at {} in block {} (tx {})",
            self.contract, self.address, self.block_number, self.transaction_hash
        )
    }
}

impl StructuredLog for DeploymentCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            contract = self.contract,
            address = self.address,
            transaction_hash = self.transaction_hash,
            block_number = self.block_number,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "deployment_completed",
            span_name = name,
            contract = self.contract,
            address = self.address,
        )
    }
}

/// A deployment config failed validation; nothing was sent.
///
/// # Log Level
/// `warn!` - Caller supplied unusable input
pub struct DeploymentRejected<'a> {
    pub contract: &'a str,
    pub error_count: usize,
}

impl Display for DeploymentRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected {} deployment: {} validation error(s)",
            self.contract, self.error_count
        )
    }
}

impl StructuredLog for DeploymentRejected<'_> {
    fn log(&self) {
        tracing::warn!(contract = self.contract, error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("deployment_rejected", span_name = name, contract = self.contract)
    }
}

/// The deployer backend returned an error.
///
/// # Log Level
/// `error!` - Deployment did not happen
pub struct DeploymentFailed<'a> {
    pub contract: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DeploymentFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Deployment of {} failed: {}", self.contract, self.error)
    }
}

impl StructuredLog for DeploymentFailed<'_> {
    fn log(&self) {
        tracing::error!(contract = self.contract, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("deployment_failed", span_name = name, contract = self.contract)
    }
}

/// Explorer verification finished with the given status.
///
/// # Log Level
/// `info!` when submitted, `warn!` on failure
pub struct VerificationFinished<'a> {
    pub address: &'a str,
    pub succeeded: bool,
    pub message: &'a str,
}

impl Display for VerificationFinished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Verification of {}: {}", self.address, self.message)
    }
}

impl StructuredLog for VerificationFinished<'_> {
    fn log(&self) {
        if self.succeeded {
            tracing::info!(address = self.address, "{}", self);
        } else {
            tracing::warn!(address = self.address, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("verification", span_name = name, address = self.address)
    }
}
