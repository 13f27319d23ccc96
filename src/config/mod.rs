// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod networks;

pub mod consts;


pub use loader::{load_and_validate_config, load_config, DeploymentDefaults, SdkConfig};
pub use networks::{supported_networks, NetworkConfig};
