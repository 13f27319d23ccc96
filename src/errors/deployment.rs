// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for handler deployment.

use thiserror::Error;

use super::ValidationError;

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeploymentError {
    /// The handler configuration was rejected before anything was sent.
    #[error("Invalid deployment config: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// The deployer backend failed to submit or confirm the deployment.
    #[error("Deployment via {deployer} failed: {reason}")]
    Backend {
        deployer: &'static str,
        reason: String,
    },
}

impl DeploymentError {
    /// Validation failures, empty for backend errors.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            DeploymentError::InvalidConfig(errors) => errors,
            DeploymentError::Backend { .. } => &[],
        }
    }
}

impl From<ValidationError> for DeploymentError {
    fn from(err: ValidationError) -> Self {
        DeploymentError::InvalidConfig(vec![err])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_lists_every_error() {
        let err = DeploymentError::InvalidConfig(vec![
            ValidationError::NotPositive { field: "interval_blocks" },
            ValidationError::InvalidAddress {
                field: "oracle",
                value: "0x12".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid deployment config: interval_blocks must be positive; Invalid oracle address: '0x12'"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }
}
