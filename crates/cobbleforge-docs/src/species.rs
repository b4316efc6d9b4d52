//! Full species definition synthesis.

use std::path::PathBuf;

use cobbleforge_core::{BaseStats, Hitbox, SpeciesProfile};
use serde::Serialize;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;
use crate::shapes::{BehaviourDoc, DropsDoc, EvolutionDoc, FlyDoc, MovingDoc, SwimDoc};

/// Complete species document. Every field carries a value; defaults were
/// applied during normalization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeciesDoc {
    implemented: bool,
    name: String,
    labels: Vec<String>,
    pokedex: Vec<String>,
    national_pokedex_number: u32,
    primary_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_type: Option<String>,
    base_stats: BaseStats,
    catch_rate: u32,
    male_ratio: f64,
    base_experience_yield: u32,
    experience_group: String,
    egg_cycles: u32,
    egg_groups: Vec<String>,
    base_friendship: u32,
    ev_yield: BaseStats,
    height: u32,
    weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hitbox: Option<Hitbox>,
    aspects: Vec<String>,
    cannot_dynamax: bool,
    drops: DropsDoc,
    moves: Vec<String>,
    abilities: Vec<String>,
    evolutions: Vec<EvolutionDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pre_evolution: Option<String>,
    behaviour: BehaviourDoc,
}

/// Synthesize the full species definition (OVERWRITE policy).
pub fn species_document(
    profile: &SpeciesProfile,
    namespace: &str,
) -> Result<SynthesizedDocument, DocError> {
    let id = &profile.id;

    let moving = MovingDoc {
        can_look: Some(profile.movement.can_look),
        fly: profile.movement.can_fly.then(|| FlyDoc { can_fly: true }),
        swim: profile.movement.can_swim.then(|| SwimDoc {
            swim_speed: Some(0.3),
            can_swim_in_water: true,
            can_breathe_underwater: profile.movement.can_breathe_underwater,
        }),
    };

    let doc = SpeciesDoc {
        implemented: true,
        name: id.to_string(),
        labels: vec!["custom".to_string()],
        pokedex: vec![
            format!("{namespace}.species.{id}.desc1"),
            format!("{namespace}.species.{id}.desc2"),
        ],
        national_pokedex_number: profile.dex_number,
        primary_type: profile.primary_type.clone(),
        secondary_type: profile.secondary_type.clone(),
        base_stats: profile.base_stats,
        catch_rate: profile.catch_rate,
        male_ratio: profile.male_ratio,
        base_experience_yield: profile.base_experience_yield,
        experience_group: profile.experience_group.clone(),
        egg_cycles: profile.egg_cycles,
        egg_groups: profile.egg_groups.clone(),
        base_friendship: profile.base_friendship,
        ev_yield: profile.ev_yield,
        height: profile.height,
        weight: profile.weight,
        base_scale: profile.base_scale,
        hitbox: profile.hitbox,
        aspects: Vec::new(),
        cannot_dynamax: false,
        drops: DropsDoc::new(profile.drops.clone()),
        moves: profile.moves.clone(),
        abilities: profile.abilities.clone(),
        evolutions: profile.evolutions.iter().map(EvolutionDoc::from).collect(),
        pre_evolution: profile.pre_evolution.clone(),
        behaviour: BehaviourDoc { moving },
    };

    Ok(SynthesizedDocument {
        kind: DocumentKind::Species,
        relative_path: PathBuf::from(format!(
            "behavior_pack/data/{namespace}/species/custom/{id}.json"
        )),
        content: serde_json::to_value(doc)?,
        policy: WritePolicy::Overwrite,
    })
}
