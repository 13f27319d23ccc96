// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ValidationError;

/// Handler registry failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandlerError {
    #[error("Handler {0} is already registered")]
    Duplicate(String),

    #[error("No handler registered at {0}")]
    NotFound(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
