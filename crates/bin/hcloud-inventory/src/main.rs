//! # hcloud-inventory — Ansible dynamic inventory for Hetzner Cloud
//!
//! Composition root that wires all adapters together and prints one
//! inventory document.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Install the `tracing` subscriber (stderr only)
//! - Load the group mapping and construct the selected grouping policy
//! - Construct the Hetzner Cloud host source
//! - Run the inventory service and print the answer on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use hcloud_inventory_adapter_hcloud::HcloudClient;
use hcloud_inventory_app::policies::{PatternPolicy, StaticTablePolicy};
use hcloud_inventory_app::ports::GroupingPolicy;
use hcloud_inventory_app::services::inventory_service::InventoryService;
use hcloud_inventory_domain::document::{render, render_host};
use hcloud_inventory_domain::mapping::GroupMapping;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Request};
use crate::config::{Config, DEFAULT_GROUPS_FILE, GroupsConfig, PolicyKind};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    config.apply_cli(&cli);
    config.validate()?;

    let (filter, rejected) = match EnvFilter::try_new(&config.logging.filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("warn"), Some(err)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = rejected {
        tracing::warn!(
            filter = %config.logging.filter,
            error = %err,
            "invalid log filter, falling back to warn"
        );
    }

    // Grouping
    let mapping = load_mapping(&config.groups)?;
    let policy = build_policy(&config.groups, mapping.clone())?;

    // Host source
    let client =
        HcloudClient::new(config.hcloud.clone()).context("configuring Hetzner Cloud client")?;

    // Service
    let service = InventoryService::new(client, policy).with_mapping(mapping);
    let inventory = service.generate().await.context("building inventory")?;

    let output = match cli.request() {
        Request::Host(host) => {
            let vars = render_host(&inventory, host);
            if cli.pretty {
                serde_json::to_string_pretty(&vars)?
            } else {
                vars.to_string()
            }
        }
        Request::List => {
            let document = render(&inventory);
            if cli.pretty {
                document.to_json_pretty()?
            } else {
                document.to_json()?
            }
        }
    };
    println!("{output}");

    Ok(())
}

fn load_mapping(groups: &GroupsConfig) -> anyhow::Result<GroupMapping> {
    let mapping = match &groups.path {
        Some(path) => hcloud_inventory_adapter_groups_file::load(path)
            .with_context(|| format!("loading group mapping {}", path.display()))?,
        None => hcloud_inventory_adapter_groups_file::load_or_default(DEFAULT_GROUPS_FILE)
            .with_context(|| format!("loading group mapping {DEFAULT_GROUPS_FILE}"))?,
    };
    Ok(mapping)
}

fn build_policy(
    groups: &GroupsConfig,
    mapping: GroupMapping,
) -> anyhow::Result<Box<dyn GroupingPolicy + Send + Sync>> {
    let policy: Box<dyn GroupingPolicy + Send + Sync> = match groups.policy {
        PolicyKind::Static => Box::new(StaticTablePolicy::new(mapping)),
        PolicyKind::Pattern => {
            let policy = match &groups.pattern {
                Some(pattern) => PatternPolicy::with_pattern(mapping, pattern)?,
                None => PatternPolicy::new(mapping)?,
            };
            tracing::debug!(pattern = policy.pattern(), "using pattern policy");
            Box::new(policy)
        }
    };
    Ok(policy)
}
