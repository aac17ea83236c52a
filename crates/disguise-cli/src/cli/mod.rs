//! CLI command definitions for the `disguise` binary.

pub mod entities;
pub mod providers;
pub mod resolve;

use clap::{Parser, Subcommand, ValueEnum};

use disguise_types::entity::EntityType;

/// Resolve player disguises from remote skin providers.
#[derive(Parser)]
#[command(name = "disguise", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a disguise and print it.
    Resolve(ResolveArgs),

    /// List the built-in skin providers.
    Providers,

    /// List the entity types a player can be disguised as.
    Entities,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Skin provider used with --id.
    #[arg(long, value_enum, default_value_t = ProviderArg::Mojang, requires = "id")]
    pub provider: ProviderArg,

    /// Player UUID (mojang, minetools) or texture bundle id (mineskin).
    #[arg(long, conflicts_with_all = ["texture", "signature"])]
    pub id: Option<String>,

    /// Skin texture (base64), used together with --signature.
    #[arg(long, requires = "signature")]
    pub texture: Option<String>,

    /// Skin signature, used together with --texture.
    #[arg(long, requires = "texture")]
    pub signature: Option<String>,

    /// Display name shown instead of the player's own.
    #[arg(long)]
    pub name: Option<String>,

    /// Entity the player should look like (e.g. zombie, iron_golem).
    #[arg(long)]
    pub entity: Option<EntityType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Mojang,
    Minetools,
    Mineskin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_with_lookup() {
        let cli = Cli::try_parse_from([
            "disguise",
            "resolve",
            "--provider",
            "minetools",
            "--id",
            "069a79f444e94726a5befca90e38aaf5",
            "--entity",
            "iron_golem",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.provider, ProviderArg::Minetools);
        assert_eq!(args.entity, Some(EntityType::IronGolem));
    }

    #[test]
    fn test_provider_requires_id() {
        let result = Cli::try_parse_from(["disguise", "resolve", "--provider", "mineskin"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["disguise", "resolve", "--name", "Grumm"]).unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.provider, ProviderArg::Mojang);
        assert!(args.id.is_none());
    }

    #[test]
    fn test_texture_requires_signature() {
        let result = Cli::try_parse_from(["disguise", "resolve", "--texture", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_conflicts_with_direct_skin() {
        let result = Cli::try_parse_from([
            "disguise",
            "resolve",
            "--id",
            "abc",
            "--texture",
            "t",
            "--signature",
            "s",
        ]);
        assert!(result.is_err());
    }
}
