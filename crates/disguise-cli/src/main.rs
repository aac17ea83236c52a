//! `disguise` -- resolve a player disguise from the command line.
//!
//! Parses CLI arguments, loads `config.toml` from the data directory, wires
//! the built-in skin providers and dispatches to the command handler.

mod cli;

use clap::Parser;

use cli::{Cli, Commands};
use disguise_infra::config::{load_config, resolve_data_dir};
use disguise_infra::skin::BuiltinSkinApis;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,disguise_core=debug,disguise_infra=debug",
        _ => "trace",
    };
    disguise_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    disguise_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Entities = cli.command {
        return cli::entities::list_entities(cli.json);
    }

    let data_dir = resolve_data_dir();
    let config = load_config(&data_dir).await;
    tracing::debug!(data_dir = %data_dir.display(), "configuration loaded");
    let apis = BuiltinSkinApis::from_config(&config)?;

    match cli.command {
        Commands::Resolve(args) => cli::resolve::resolve(&apis, args, cli.json).await,
        Commands::Providers => cli::providers::list_providers(&apis, cli.json),
        Commands::Entities => unreachable!("handled above"),
    }
}
