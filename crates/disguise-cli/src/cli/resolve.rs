//! `disguise resolve`

use anyhow::{Context, bail};
use uuid::Uuid;

use disguise_core::disguise::{Disguise, DisguiseBuilder};
use disguise_infra::skin::BuiltinSkinApis;

use super::{ProviderArg, ResolveArgs};

/// Assemble the builder from command-line arguments.
///
/// Skin lookups start here; the caller awaits `build()`.
pub fn builder_from_args(apis: &BuiltinSkinApis, args: ResolveArgs) -> anyhow::Result<DisguiseBuilder> {
    let mut builder = Disguise::builder();

    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if let Some(entity_type) = args.entity {
        builder = builder.entity_type(entity_type);
    }

    builder = match (args.id, args.texture, args.signature) {
        (Some(id), _, _) => match args.provider {
            ProviderArg::Mojang => builder.skin_from(apis.mojang(), parse_uuid(&id)?),
            ProviderArg::Minetools => builder.skin_from(apis.minetools(), parse_uuid(&id)?),
            ProviderArg::Mineskin => builder.skin_from(apis.mineskin(), id),
        },
        (None, Some(texture), Some(signature)) => builder.skin_texture(texture, signature),
        (None, None, None) => builder,
        _ => bail!("--texture and --signature must be given together"),
    };

    Ok(builder)
}

pub async fn resolve(apis: &BuiltinSkinApis, args: ResolveArgs, json: bool) -> anyhow::Result<()> {
    let provider = args.provider;
    let disguise = builder_from_args(apis, args)?
        .build()
        .await
        .with_context(|| format!("skin lookup via {provider:?} failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&disguise)?);
    } else {
        print_disguise(&disguise);
    }
    Ok(())
}

fn parse_uuid(id: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("'{id}' is not a valid UUID"))
}

fn print_disguise(disguise: &Disguise) {
    let check_mark = |ok: bool| {
        if ok {
            format!("{}", console::style("✓").green())
        } else {
            format!("{}", console::style("✗").red())
        }
    };

    println!();
    if disguise.is_empty() {
        println!("  {}", console::style("Empty disguise (nothing changes)").dim());
        println!();
        return;
    }

    println!(
        "  {} Name: {}",
        check_mark(disguise.has_name()),
        console::style(disguise.name().unwrap_or("-")).cyan()
    );
    println!(
        "  {} Skin: {}",
        check_mark(disguise.has_skin()),
        disguise.textures().map(abbreviate).unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  {} Entity: {}",
        check_mark(disguise.has_entity()),
        disguise
            .entity()
            .and_then(|e| e.entity_type())
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!();
}

fn abbreviate(texture: &str) -> String {
    const SHOWN: usize = 24;
    if texture.chars().count() <= SHOWN {
        return texture.to_string();
    }
    let head: String = texture.chars().take(SHOWN).collect();
    format!("{head}… ({} chars)", texture.chars().count())
}
