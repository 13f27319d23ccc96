// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod decode;
mod deployment;
mod handler;
mod subscription;
mod validation;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use deployment::DeploymentError;
pub use handler::HandlerError;
pub use subscription::SubscriptionError;
pub use validation::{ChainRole, ValidationError};
