//! Command-line front end for the pack generator.
//!
//! Two commands:
//! - `generate` creates a complete species: data documents, visual
//!   documents, language entries, and (when an asset directory is given)
//!   relocated Blockbench exports.
//! - `edit` amends an existing species with a sparse addition document.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cobbleforge_core::{EvolutionMethod, EvolutionRequest, SpeciesAttributes};
use cobbleforge_pack::{
    create_addition, generate_pack, process_assets, AdditionRequest, PackConfig,
};
use tracing::error;

#[derive(Debug, Parser)]
#[command(
    name = "cobbleforge",
    about = "Creature pack generator for Cobblemon",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pack root directory (holds resource_pack/ and behavior_pack/).
    #[arg(long, global = true, default_value = ".")]
    base_dir: PathBuf,

    /// Namespace embedded in paths and identifiers.
    #[arg(long, global = true, default_value = "cobblemon")]
    namespace: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the full document set for a new species.
    Generate(Box<GenerateArgs>),
    /// Amend an existing species with an addition document.
    Edit(Box<EditArgs>),
}

#[derive(Debug, Parser)]
struct GenerateArgs {
    /// Species display name.
    #[arg(long)]
    name: String,

    /// National dex number.
    #[arg(long)]
    number: u32,

    /// Primary type (default: normal).
    #[arg(long)]
    primary_type: Option<String>,

    /// Secondary type (optional).
    #[arg(long)]
    secondary_type: Option<String>,

    /// HP stat (default: 50).
    #[arg(long)]
    hp: Option<u32>,

    /// Attack stat (default: 50).
    #[arg(long)]
    attack: Option<u32>,

    /// Defence stat (default: 50).
    #[arg(long)]
    defence: Option<u32>,

    /// Special attack stat (default: 50).
    #[arg(long)]
    special_attack: Option<u32>,

    /// Special defence stat (default: 50).
    #[arg(long)]
    special_defence: Option<u32>,

    /// Speed stat (default: 50).
    #[arg(long)]
    speed: Option<u32>,

    /// Comma-separated moves (e.g. "1:tackle,7:ember,tm:flamethrower").
    #[arg(long)]
    moves: Option<String>,

    /// Comma-separated abilities (e.g. "blaze,h:solar_power").
    #[arg(long)]
    abilities: Option<String>,

    /// Height in decimeters (default: 10).
    #[arg(long)]
    height: Option<u32>,

    /// Weight in hectograms (default: 100).
    #[arg(long)]
    weight: Option<u32>,

    /// Model scale multiplier.
    #[arg(long)]
    base_scale: Option<f64>,

    /// Hitbox size (format: "width,height").
    #[arg(long)]
    hitbox: Option<String>,

    /// Item drops (format: "item:percentage,item:percentage").
    #[arg(long)]
    drops: Option<String>,

    /// The creature can fly.
    #[arg(long)]
    can_fly: bool,

    /// The creature can swim.
    #[arg(long)]
    can_swim: bool,

    /// The creature can breathe underwater (use with --can-swim).
    #[arg(long)]
    breathe_underwater: bool,

    /// Spawn rarity bucket (default: common).
    #[arg(long)]
    rarity: Option<String>,

    /// Spawn level range, e.g. "10-40" (default: 5-30).
    #[arg(long)]
    spawn_level: Option<String>,

    /// Comma-separated spawn biomes (default: #minecraft:is_overworld).
    #[arg(long)]
    spawn_biomes: Option<String>,

    /// First pokedex entry.
    #[arg(long)]
    desc1: Option<String>,

    /// Second pokedex entry.
    #[arg(long)]
    desc2: Option<String>,

    /// Head bone name; use "none" if the model has no head.
    #[arg(long, default_value = "head")]
    head_bone: String,

    /// Directory to scan for Blockbench exports (animations, models,
    /// textures) to pull into the pack.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Keep source files instead of deleting them after relocation.
    #[arg(long)]
    no_cleanup: bool,
}

#[derive(Debug, Parser)]
struct EditArgs {
    /// Target species to modify.
    #[arg(long)]
    pokemon: String,

    /// Comma-separated moves (WARNING: replaces ALL moves!).
    #[arg(long)]
    add_moves: Option<String>,

    /// Add an evolution into this species.
    #[arg(long)]
    add_evolution: Option<String>,

    /// Evolution trigger: level_up, item_interact, or trade.
    #[arg(long, default_value = "level_up")]
    evo_method: String,

    /// Evolution level for level_up (default: 36).
    #[arg(long)]
    evo_level: Option<u32>,

    /// Required item for item_interact, or held item for trade.
    #[arg(long)]
    evo_item: Option<String>,

    /// Change primary type.
    #[arg(long)]
    primary_type: Option<String>,

    /// Change secondary type.
    #[arg(long)]
    secondary_type: Option<String>,

    /// Set abilities (e.g. "blaze,h:solar_power").
    #[arg(long)]
    abilities: Option<String>,

    /// Model scale multiplier.
    #[arg(long)]
    base_scale: Option<f64>,

    /// Hitbox size (format: "width,height").
    #[arg(long)]
    hitbox: Option<String>,

    /// Item drops (format: "item:percentage,item:percentage").
    #[arg(long)]
    drops: Option<String>,

    /// Enable flight.
    #[arg(long)]
    can_fly: bool,

    /// Enable swimming.
    #[arg(long)]
    can_swim: bool,

    /// Can breathe underwater (use with --can-swim).
    #[arg(long)]
    breathe_underwater: bool,

    /// Tag prefixed to the addition file name (default: custom).
    #[arg(long, default_value = "custom")]
    tag: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = PackConfig::with_namespace(args.base_dir, args.namespace);

    let result = match args.command {
        Command::Generate(generate) => run_generate(*generate, &config),
        Command::Edit(edit) => run_edit(*edit, &config),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_generate(args: GenerateArgs, config: &PackConfig) -> Result<bool> {
    let attrs = SpeciesAttributes {
        name: args.name,
        dex_number: args.number,
        primary_type: args.primary_type,
        secondary_type: args.secondary_type,
        hp: args.hp,
        attack: args.attack,
        defence: args.defence,
        special_attack: args.special_attack,
        special_defence: args.special_defence,
        speed: args.speed,
        moves: args.moves,
        abilities: args.abilities,
        height: args.height,
        weight: args.weight,
        base_scale: args.base_scale,
        hitbox: args.hitbox,
        drops: args.drops,
        can_fly: args.can_fly,
        can_swim: args.can_swim,
        breathe_underwater: args.breathe_underwater,
        head_bone: Some(args.head_bone),
        rarity: args.rarity,
        spawn_level: args.spawn_level,
        spawn_biomes: args.spawn_biomes,
        desc1: args.desc1,
        desc2: args.desc2,
        ..SpeciesAttributes::default()
    };

    let report = generate_pack(&attrs, config)?;
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for doc in &report.documents {
        println!("{}: {} ({})", doc.kind, doc.path.display(), doc.status);
    }

    let success = report.success();
    if let Some(assets_dir) = args.assets {
        let asset_report =
            process_assets(&assets_dir, &report.species, config, !args.no_cleanup)?;
        for warning in &asset_report.warnings {
            println!("warning: {warning}");
        }
        if asset_report.is_empty() {
            println!("no assets found in {}", assets_dir.display());
        }
        for relocated in &asset_report.relocated {
            println!(
                "{}: {} -> {}",
                relocated.category,
                relocated.source.display(),
                relocated.destination.display()
            );
        }
        if asset_report.deleted > 0 {
            println!("removed {} source file(s)", asset_report.deleted);
        }
        for skip in &asset_report.skipped_deletions {
            println!("kept {}: {}", skip.path.display(), skip.reason);
        }
    }

    if success {
        println!(
            "generated {} in {}",
            report.species,
            config.base_dir.display()
        );
    } else {
        println!("some documents failed to write");
    }
    Ok(success)
}

fn run_edit(args: EditArgs, config: &PackConfig) -> Result<bool> {
    let evolution = args.add_evolution.map(|target| EvolutionRequest {
        target,
        method: match args.evo_method.as_str() {
            "item_interact" => EvolutionMethod::ItemInteract,
            "trade" => EvolutionMethod::Trade,
            _ => EvolutionMethod::LevelUp,
        },
        level: args.evo_level,
        item: args.evo_item,
    });

    let request = AdditionRequest {
        target: args.pokemon,
        tag: args.tag,
        changes: cobbleforge_core::AdditionChanges {
            moves: args.add_moves,
            evolution,
            primary_type: args.primary_type,
            secondary_type: args.secondary_type,
            abilities: args.abilities,
            base_scale: args.base_scale,
            hitbox: args.hitbox,
            drops: args.drops,
            can_fly: args.can_fly,
            can_swim: args.can_swim,
            breathe_underwater: args.breathe_underwater,
        },
    };

    let report = create_addition(&request, config)?;
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    println!(
        "{}: {} ({})",
        report.document.kind,
        report.document.path.display(),
        report.document.status
    );
    Ok(report.success())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn generate_parses_movement_flags() {
        let args = Args::parse_from([
            "cobbleforge",
            "generate",
            "--name",
            "Drago",
            "--number",
            "2001",
            "--can-fly",
            "--head-bone",
            "none",
        ]);
        let Command::Generate(generate) = args.command else {
            panic!("expected generate");
        };
        assert!(generate.can_fly);
        assert!(!generate.can_swim);
        assert_eq!(generate.head_bone, "none");
    }

    #[test]
    fn edit_parses_evolution_arguments() {
        let args = Args::parse_from([
            "cobbleforge",
            "edit",
            "--pokemon",
            "charmander",
            "--add-evolution",
            "charmeleon",
            "--evo-level",
            "16",
        ]);
        let Command::Edit(edit) = args.command else {
            panic!("expected edit");
        };
        assert_eq!(edit.add_evolution.as_deref(), Some("charmeleon"));
        assert_eq!(edit.evo_method, "level_up");
        assert_eq!(edit.evo_level, Some(16));
    }
}
