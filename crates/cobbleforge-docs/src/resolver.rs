//! Model resolver document synthesis.
//!
//! Declares exactly two visual variants: the base look and the `shiny`
//! aspect, each pointing at a deterministic texture path derived from the
//! species identifier. These paths match where the asset relocator puts
//! copied textures.

use std::path::PathBuf;

use cobbleforge_core::SpeciesProfile;
use serde::Serialize;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;

#[derive(Debug, Serialize)]
struct ResolverDoc {
    species: String,
    order: u32,
    variations: Vec<VariationDoc>,
}

#[derive(Debug, Serialize)]
struct VariationDoc {
    aspects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    poser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    texture: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layers: Option<Vec<String>>,
}

/// Synthesize the model resolver (OVERWRITE policy).
pub fn resolver_document(
    profile: &SpeciesProfile,
    namespace: &str,
) -> Result<SynthesizedDocument, DocError> {
    let id = &profile.id;

    let doc = ResolverDoc {
        species: id.qualified(namespace),
        order: 0,
        variations: vec![
            VariationDoc {
                aspects: Vec::new(),
                poser: Some(id.qualified(namespace)),
                model: Some(format!("{namespace}:{id}.geo")),
                texture: format!("{namespace}:textures/pokemon/{id}/{id}.png"),
                layers: Some(Vec::new()),
            },
            VariationDoc {
                aspects: vec!["shiny".to_string()],
                poser: None,
                model: None,
                texture: format!("{namespace}:textures/pokemon/{id}/{id}_shiny.png"),
                layers: None,
            },
        ],
    };

    Ok(SynthesizedDocument {
        kind: DocumentKind::Resolver,
        relative_path: PathBuf::from(format!(
            "resource_pack/assets/{namespace}/bedrock/pokemon/resolvers/0_{id}_base.json"
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

    #[test]
    fn resolver_declares_base_and_shiny_variants() {
        let (profile, _) = SpeciesAttributes::new("Flamebird", 999).normalize().unwrap();
        let doc = resolver_document(&profile, "cobblemon").unwrap();

        assert_eq!(doc.content["species"], "cobblemon:flamebird");
        assert_eq!(doc.content["order"], 0);

        let variations = doc.content["variations"].as_array().unwrap();
        assert_eq!(variations.len(), 2);

        assert_eq!(variations[0]["aspects"], json!([]));
        assert_eq!(variations[0]["poser"], "cobblemon:flamebird");
        assert_eq!(variations[0]["model"], "cobblemon:flamebird.geo");
        assert_eq!(
            variations[0]["texture"],
            "cobblemon:textures/pokemon/flamebird/flamebird.png"
        );

        assert_eq!(variations[1]["aspects"], json!(["shiny"]));
        assert_eq!(
            variations[1]["texture"],
            "cobblemon:textures/pokemon/flamebird/flamebird_shiny.png"
        );
        assert!(variations[1].get("model").is_none());
    }

    #[test]
    fn resolver_path_sorts_before_other_resolvers() {
        let (profile, _) = SpeciesAttributes::new("Flamebird", 999).normalize().unwrap();
        let doc = resolver_document(&profile, "cobblemon").unwrap();
        assert_eq!(
            doc.relative_path.to_str().unwrap(),
            "resource_pack/assets/cobblemon/bedrock/pokemon/resolvers/0_flamebird_base.json"
        );
    }
}
