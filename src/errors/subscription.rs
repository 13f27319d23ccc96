// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ValidationError;

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to produce a [`SubscriptionConfig`](crate::subscriptions::SubscriptionConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubscriptionError {
    /// One or more fields failed validation. Every failure is reported.
    #[error("Subscription validation failed: {}", join(.0))]
    Invalid(Vec<ValidationError>),
}

impl SubscriptionError {
    /// The individual validation failures.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SubscriptionError::Invalid(errors) => errors,
        }
    }
}

impl From<ValidationError> for SubscriptionError {
    fn from(err: ValidationError) -> Self {
        SubscriptionError::Invalid(vec![err])
    }
}
