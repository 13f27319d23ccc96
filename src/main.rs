// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use compound_max::backends::SimulatedDeployer;
use compound_max::config::{load_and_validate_config, SdkConfig};
use compound_max::decoders::{create_event_decoder, AbiItem, EventDecoder, RawLog};
use compound_max::deployment::{
    deploy_auto_compound_handler, AutoCompoundConfig, DeploymentOptions, DeploymentOutcome,
};
use compound_max::subscriptions::{parse_event_signature, SubscriptionBuilder};
use compound_max::utils::parse_token_amount;

use cli::{Cli, Commands, DeployCommands};

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_sdk_config(path: Option<&Path>) -> Result<SdkConfig> {
    match path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(SdkConfig::default()),
    }
}

fn read_logs(path: &Path) -> Result<Vec<RawLog>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let logs = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        single => vec![serde_json::from_value(single)?],
    };
    Ok(logs)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignatureReport {
    #[serde(flatten)]
    signature: compound_max::subscriptions::EventSignature,
    canonical: String,
    topic_hash: String,
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signature { signature } => {
            let parsed = parse_event_signature(&signature)?;
            print_json(&SignatureReport {
                canonical: parsed.canonical(),
                topic_hash: parsed.topic_hash(),
                signature: parsed,
            })
        }

        Commands::Subscribe {
            handler,
            event,
            from,
            to,
            address,
            topic,
        } => {
            let mut builder = SubscriptionBuilder::new(handler).on_event(event);
            if let Some(chain_id) = from {
                builder = builder.from_chain(chain_id);
            }
            if let Some(chain_id) = to {
                builder = builder.to_chain(chain_id);
            }
            if !address.is_empty() {
                builder = builder.with_addresses(address);
            }
            for t in topic {
                builder = builder.with_topic(t);
            }
            print_json(&builder.build()?)
        }

        Commands::Decode {
            file,
            handler_kind,
            abi,
        } => {
            let mut decoder = match handler_kind {
                Some(kind) => create_event_decoder(kind),
                None => EventDecoder::new(),
            };
            if let Some(abi_path) = abi {
                let content = fs::read_to_string(&abi_path)
                    .with_context(|| format!("reading {}", abi_path.display()))?;
                let items: Vec<AbiItem> = serde_json::from_str(&content)?;
                decoder = decoder.with_abi(&items)?;
            }
            let decoded: Vec<_> = read_logs(&file)?.iter().map(|log| decoder.decode(log)).collect();
            print_json(&decoded)
        }

        Commands::Deploy {
            handler:
                DeployCommands::AutoCompound {
                    vault,
                    token,
                    threshold,
                    decimals,
                    owner,
                    network,
                    verify,
                },
        } => {
            let sdk = load_sdk_config(cli.config.as_deref())?;
            let network = match network {
                Some(name) => sdk.network(&name)?,
                None => sdk.default_network()?,
            };
            let mut options = DeploymentOptions::from_defaults(network.clone(), &sdk.deployment);
            options.verify_on_explorer |= verify;

            let config = AutoCompoundConfig {
                vault_address: vault,
                token_address: token,
                compound_threshold: parse_token_amount(&threshold, decimals)?,
                initial_owner: owner,
            };
            let result =
                deploy_auto_compound_handler(&SimulatedDeployer::new(), &config, &options).await;
            let failed = result.is_err();
            print_json(&DeploymentOutcome::from(result))?;
            if failed {
                anyhow::bail!("deployment failed");
            }
            Ok(())
        }

        Commands::Networks => {
            let sdk = load_sdk_config(cli.config.as_deref())?;
            print_json(&sdk.networks)
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
