//! Hexwire CLI - Compose and run a layered service graph
//!
//! Wires the repository/service/auth/http/db/worker/queue components,
//! either by hand or through the capability container, and runs the
//! selected cascades.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use hexwire_core::{Config, ConfigStore, Scenario, Strategy};

#[derive(Parser)]
#[command(name = "hexwire")]
#[command(author, version, about = "Compose and run a layered service graph")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON config file (default: ~/.hexwire/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the graph and run the cascades (default)
    Run(RunArgs),

    /// Print the container bindings and their dependencies
    Graph {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate the container graph without running anything
    Check,
}

/// Overrides for values loaded from the config file.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Wiring strategy: manual or container
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Cascades to run: client, http, pipeline or all
    #[arg(long)]
    scenario: Option<Scenario>,

    /// Simulated latency of auth, db and queue steps
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Abort a cascade that runs longer than this
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl RunArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(scenario) = self.scenario {
            config.scenario = scenario;
        }
        if let Some(latency_ms) = self.latency_ms {
            config.latency_ms = latency_ms;
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hexwire_core::logging::init(cli.verbose)?;

    let store = match cli.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    };
    let config = store
        .load()
        .await
        .with_context(|| format!("Failed to load {}", store.path().display()))?;

    match cli.command {
        Some(Commands::Run(args)) => commands::run::run(config, &args).await?,
        Some(Commands::Graph { json }) => commands::graph::show(&config, json)?,
        Some(Commands::Check) => commands::graph::check(&config)?,
        None => commands::run::run(config, &RunArgs::default()).await?,
    }

    Ok(())
}
