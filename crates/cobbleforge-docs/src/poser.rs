//! Poser document synthesis.
//!
//! Maps animation names to pose states. Idle/walk/sleep poses are always
//! present; water poses appear iff the creature swims, air poses iff it
//! flies. The `head` field is present iff a head bone was resolved (a model
//! without one must not declare head tracking).

use std::collections::BTreeMap;
use std::path::PathBuf;

use cobbleforge_core::SpeciesProfile;
use serde::Serialize;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PoserDoc {
    portrait_scale: f64,
    portrait_translation: [f64; 3],
    profile_scale: f64,
    profile_translation: [f64; 3],
    faint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    head: Option<String>,
    poses: BTreeMap<String, PoseDoc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PoseDoc {
    pose_name: String,
    transform_ticks: u32,
    pose_types: Vec<&'static str>,
    animations: Vec<String>,
}

impl PoseDoc {
    fn new(name: &str, pose_types: Vec<&'static str>, animations: Vec<String>) -> Self {
        Self {
            pose_name: name.to_string(),
            transform_ticks: 10,
            pose_types,
            animations,
        }
    }
}

/// `bedrock(<id>, <animation>)` animation reference.
fn bedrock(id: &cobbleforge_core::SpeciesId, animation: &str) -> String {
    format!("bedrock({id}, {animation})")
}

/// Synthesize the poser document (OVERWRITE policy).
pub fn poser_document(
    profile: &SpeciesProfile,
    namespace: &str,
) -> Result<SynthesizedDocument, DocError> {
    let id = &profile.id;
    let mut poses = BTreeMap::new();

    let _ = poses.insert(
        "standing".to_string(),
        PoseDoc::new(
            "standing",
            vec!["STAND", "NONE", "PORTRAIT", "PROFILE"],
            vec!["look".to_string(), bedrock(id, "ground_idle")],
        ),
    );
    let _ = poses.insert(
        "walking".to_string(),
        PoseDoc::new("walking", vec!["WALK"], vec![bedrock(id, "ground_walk")]),
    );
    let _ = poses.insert(
        "sleep".to_string(),
        PoseDoc::new("sleep", vec!["SLEEP"], vec![bedrock(id, "sleep")]),
    );

    if profile.movement.can_swim {
        let _ = poses.insert(
            "floating".to_string(),
            PoseDoc::new("floating", vec!["FLOAT"], vec![bedrock(id, "water_idle")]),
        );
        let _ = poses.insert(
            "swimming".to_string(),
            PoseDoc::new("swimming", vec!["SWIM"], vec![bedrock(id, "water_swim")]),
        );
    }

    if profile.movement.can_fly {
        let _ = poses.insert(
            "flying".to_string(),
            PoseDoc::new("flying", vec!["FLY"], vec![bedrock(id, "air_fly")]),
        );
        let _ = poses.insert(
            "hovering".to_string(),
            PoseDoc::new("hovering", vec!["HOVER"], vec![bedrock(id, "air_idle")]),
        );
    }

    let doc = PoserDoc {
        portrait_scale: 1.25,
        portrait_translation: [0.0, 0.5, 0.0],
        profile_scale: 0.8,
        profile_translation: [0.0, 0.4, 0.0],
        faint: bedrock(id, "faint"),
        head: profile.head_bone.clone(),
        poses,
    };

    Ok(SynthesizedDocument {
        kind: DocumentKind::Poser,
        relative_path: PathBuf::from(format!(
            "resource_pack/assets/{namespace}/bedrock/pokemon/posers/{id}.json"
        )),
        content: serde_json::to_value(doc)?,
        policy: WritePolicy::Overwrite,
    })
}
