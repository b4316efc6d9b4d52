//! Spawn pool document synthesis.
//!
//! Swimmers spawn submerged with the underwater preset; everything else,
//! flyers included, spawns grounded with the natural preset.

use std::path::PathBuf;

use cobbleforge_core::SpeciesProfile;
use serde::Serialize;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpawnPoolDoc {
    enabled: bool,
    needed_installed_mods: Vec<String>,
    needed_uninstalled_mods: Vec<String>,
    spawns: Vec<SpawnDoc>,
}

#[derive(Debug, Serialize)]
struct SpawnDoc {
    id: String,
    pokemon: String,
    presets: Vec<&'static str>,
    #[serde(rename = "type")]
    spawn_type: &'static str,
    context: &'static str,
    bucket: String,
    level: String,
    weight: f64,
    condition: ConditionDoc,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConditionDoc {
    can_see_sky: bool,
    biomes: Vec<String>,
}

/// Synthesize the spawn pool document (OVERWRITE policy).
pub fn spawn_pool_document(
    profile: &SpeciesProfile,
    namespace: &str,
) -> Result<SynthesizedDocument, DocError> {
    let id = &profile.id;
    let (context, presets) = if profile.movement.can_swim {
        ("submerged", vec!["underwater"])
    } else {
        ("grounded", vec!["natural"])
    };

    let doc = SpawnPoolDoc {
        enabled: true,
        needed_installed_mods: Vec::new(),
        needed_uninstalled_mods: Vec::new(),
        spawns: vec![SpawnDoc {
            id: format!("{id}-1"),
            pokemon: id.to_string(),
            presets,
            spawn_type: "pokemon",
            context,
            bucket: profile.spawn.bucket.clone(),
            level: profile.spawn.level_range.clone(),
            weight: profile.spawn.weight,
            condition: ConditionDoc {
                can_see_sky: profile.spawn.see_sky,
                biomes: profile.spawn.biomes.clone(),
            },
        }],
    };

    Ok(SynthesizedDocument {
        kind: DocumentKind::SpawnPool,
        relative_path: PathBuf::from(format!(
            "behavior_pack/data/{namespace}/spawn_pool_world/{id}.json"
        )),
        content: serde_json::to_value(doc)?,
        policy: WritePolicy::Overwrite,
    })
}

#[cfg(test)]
mod tests {
    use cobbleforge_core::SpeciesAttributes;
    use serde_json::json;

    use super::*;

    fn spawn_for(attrs: SpeciesAttributes) -> SynthesizedDocument {
        let (profile, _) = attrs.normalize().unwrap();
        spawn_pool_document(&profile, "cobblemon").unwrap()
    }

    #[test]
    fn default_spawn_is_grounded_and_natural() {
        let doc = spawn_for(SpeciesAttributes::new("Flamebird", 999));
        let spawn = &doc.content["spawns"][0];
        assert_eq!(spawn["id"], "flamebird-1");
        assert_eq!(spawn["pokemon"], "flamebird");
        assert_eq!(spawn["context"], "grounded");
        assert_eq!(spawn["presets"], json!(["natural"]));
        assert_eq!(spawn["type"], "pokemon");
        assert_eq!(spawn["bucket"], "common");
        assert_eq!(spawn["level"], "5-30");
        assert_eq!(spawn["weight"], 10.0);
        assert_eq!(spawn["condition"]["canSeeSky"], true);
        assert_eq!(spawn["condition"]["biomes"], json!(["#minecraft:is_overworld"]));
    }

    #[test]
    fn swimmer_spawns_submerged() {
        let mut attrs = SpeciesAttributes::new("Seafish", 1);
        attrs.can_swim = true;
        let doc = spawn_for(attrs);
        let spawn = &doc.content["spawns"][0];
        assert_eq!(spawn["context"], "submerged");
        assert_eq!(spawn["presets"], json!(["underwater"]));
    }

    #[test]
    fn flyer_still_spawns_grounded() {
        let mut attrs = SpeciesAttributes::new("Flamebird", 999);
        attrs.can_fly = true;
        let doc = spawn_for(attrs);
        assert_eq!(doc.content["spawns"][0]["context"], "grounded");
    }

    #[test]
    fn custom_spawn_settings_flow_through() {
        let mut attrs = SpeciesAttributes::new("Raremon", 1);
        attrs.rarity = Some("ultra-rare".to_string());
        attrs.spawn_level = Some("40-60".to_string());
        attrs.spawn_weight = Some(1.5);
        attrs.spawn_biomes = Some("#minecraft:is_mountain,minecraft:grove".to_string());
        attrs.spawn_surface = Some(false);
        let doc = spawn_for(attrs);
        let spawn = &doc.content["spawns"][0];
        assert_eq!(spawn["bucket"], "ultra-rare");
        assert_eq!(spawn["level"], "40-60");
        assert_eq!(spawn["weight"], 1.5);
        assert_eq!(spawn["condition"]["canSeeSky"], false);
        assert_eq!(
            spawn["condition"]["biomes"],
            json!(["#minecraft:is_mountain", "minecraft:grove"])
        );
    }
}
