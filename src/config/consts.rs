// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Placeholder handler address used when none is supplied
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
/// Largest accepted chain ID (32-bit)
pub const MAX_CHAIN_ID: u64 = 0xFFFF_FFFF;

/// Name given to logs whose topic hash is not registered
pub const UNKNOWN_EVENT: &str = "UnknownEvent";

/// Default watch for auto-compound handlers: reward token transfers
pub const DEFAULT_AUTO_COMPOUND_EVENT: &str = "Transfer(address indexed,address indexed,uint256)";
pub const DEFAULT_CRON_EVENT: &str = "ExecutionTick()";
pub const DEFAULT_LIQUIDATION_EVENT: &str = "PriceUpdated(address indexed,uint256)";
pub const DEFAULT_CROSS_CALL_EVENT: &str = "TriggerExecution()";
/// Emitted by an auto-compound handler after each reinvestment
pub const COMPOUND_TRIGGERED_EVENT: &str = "CompoundTriggered(uint256 amount,uint256 newTotal)";

/// Default calldata limit for the cross-call orchestrator
pub const DEFAULT_MAX_CALL_DATA_SIZE: u64 = 10_000;
/// Block number reported by the simulated deployer
pub const SIMULATED_BLOCK_NUMBER: u64 = 1_234_567;
pub const DEFAULT_CONFIRMATIONS: u32 = 1;
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
