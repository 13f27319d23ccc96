// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Contract deployer backends.
//!
//! ## Simulated Backend
//! Returns random addresses and transaction hashes at a fixed block. Used
//! by the CLI and for exercising deployment flows without a chain.
//!
//! ## Stub Backend (Test-Only)
//! - **FailingDeployer**: Always errors, for failure propagation tests
//! - **RecordingDeployer**: Fixed receipt, records every request
//! - **Note**: NOT available in production builds
//!
//! Every backend implements [`ContractDeployer`](crate::traits::ContractDeployer).

pub mod simulated;
#[cfg(test)]
pub mod stub;

pub use simulated::SimulatedDeployer;
