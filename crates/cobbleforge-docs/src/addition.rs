//! Sparse species addition (patch) synthesis.
//!
//! An addition layers changes onto an existing species at load time; a
//! field that is absent from the document means "leave that field alone".
//! Nothing is ever defaulted here. Evolutions from independently authored
//! additions targeting the same species are stacked by the game's loader;
//! this tool only writes each document in isolation.

use std::path::PathBuf;

use cobbleforge_core::{Hitbox, SpeciesId, SpeciesPatch};
use serde::Serialize;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;
use crate::shapes::{BehaviourDoc, DropsDoc, EvolutionDoc, FlyDoc, MovingDoc, SwimDoc};

/// Sparse addition document. Only `target` is mandatory; every other field
/// is omitted from the JSON when not requested.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdditionDoc {
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evolutions: Option<Vec<EvolutionDoc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hitbox: Option<Hitbox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drops: Option<DropsDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    behaviour: Option<BehaviourDoc>,
}

/// Synthesize a species addition for `target` (OVERWRITE policy).
///
/// The filename embeds `tag` (a caller-chosen namespace) so independently
/// authored additions for the same species do not collide. Fails with
/// [`DocError::NoChanges`] when the patch requests nothing.
pub fn addition_document(
    target: &SpeciesId,
    patch: &SpeciesPatch,
    namespace: &str,
    tag: &str,
) -> Result<SynthesizedDocument, DocError> {
    if patch.is_empty() {
        return Err(DocError::NoChanges);
    }

    let behaviour = (patch.can_fly || patch.can_swim).then(|| BehaviourDoc {
        moving: MovingDoc {
            can_look: None,
            fly: patch.can_fly.then(|| FlyDoc { can_fly: true }),
            swim: patch.can_swim.then(|| SwimDoc {
                swim_speed: None,
                can_swim_in_water: true,
                can_breathe_underwater: patch.breathe_underwater,
            }),
        },
    });

    let doc = AdditionDoc {
        target: target.qualified(namespace),
        moves: patch.moves.clone(),
        evolutions: patch
            .evolutions
            .as_ref()
            .map(|rules| rules.iter().map(EvolutionDoc::from).collect()),
        primary_type: patch.primary_type.clone(),
        secondary_type: patch.secondary_type.clone(),
        base_scale: patch.base_scale,
        hitbox: patch.hitbox,
        abilities: patch.abilities.clone(),
        drops: patch.drops.clone().map(DropsDoc::new),
        behaviour,
    };

    Ok(SynthesizedDocument {
        kind: DocumentKind::Addition,
        relative_path: PathBuf::from(format!(
            "behavior_pack/data/{namespace}/species_additions/{tag}_{target}_addition.json"
        )),
        content: serde_json::to_value(doc)?,
        policy: WritePolicy::Overwrite,
    })
}
