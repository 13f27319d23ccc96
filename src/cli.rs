// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use compound_max::deployment::HandlerKind;

/// CompoundMax - reactive auto-compounding handler toolkit
#[derive(Parser)]
#[command(name = "compound-max")]
#[command(version)]
#[command(about = "Subscriptions, log decoding and deployment for reactive yield handlers", long_about = None)]
pub struct Cli {
    /// YAML configuration file (networks and deployment defaults)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an event signature and print its parameters and topic hash
    Signature {
        /// e.g. "Transfer(address indexed from,address indexed to,uint256 value)"
        signature: String,
    },

    /// Build and validate a subscription
    Subscribe {
        /// Handler contract address
        #[arg(long)]
        handler: String,

        /// Event signature to subscribe to
        #[arg(long)]
        event: String,

        /// Source chain ID
        #[arg(long)]
        from: Option<u64>,

        /// Target chain ID
        #[arg(long)]
        to: Option<u64>,

        /// Emitting contract address (repeatable)
        #[arg(long)]
        address: Vec<String>,

        /// Additional topic filter (repeatable)
        #[arg(long)]
        topic: Vec<String>,
    },

    /// Decode RPC logs from a JSON file (one log or an array)
    Decode {
        /// Path to the log JSON
        file: PathBuf,

        /// Also recognise this handler family's events
        #[arg(long, value_parser = parse_handler_kind)]
        handler_kind: Option<HandlerKind>,

        /// Contract ABI whose events should be recognised
        #[arg(long)]
        abi: Option<PathBuf>,
    },

    /// Deploy a handler contract
    Deploy {
        #[command(subcommand)]
        handler: DeployCommands,
    },

    /// List configured networks
    Networks,
}

#[derive(Subcommand)]
pub enum DeployCommands {
    /// Deploy an AutoCompoundHandler
    AutoCompound {
        /// Vault the rewards are reinvested into
        #[arg(long)]
        vault: String,

        /// Reward token address
        #[arg(long)]
        token: String,

        /// Compound threshold in whole tokens, e.g. "1.5"
        #[arg(long)]
        threshold: String,

        /// Token decimals used to scale the threshold
        #[arg(long, default_value_t = compound_max::config::consts::DEFAULT_TOKEN_DECIMALS)]
        decimals: u8,

        /// Initial contract owner
        #[arg(long)]
        owner: Option<String>,

        /// Target network name (default: the config's default network)
        #[arg(long)]
        network: Option<String>,

        /// Submit the contract for explorer verification
        #[arg(long)]
        verify: bool,
    },
}

fn parse_handler_kind(value: &str) -> Result<HandlerKind, String> {
    value.parse()
}
