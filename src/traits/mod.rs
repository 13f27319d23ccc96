// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod deployer;

pub use deployer::{ContractDeployer, DeploymentReceipt, DeploymentRequest};
