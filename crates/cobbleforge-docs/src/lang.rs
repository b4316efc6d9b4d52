//! Localization table synthesis.
//!
//! The only MERGE-policy document: entries from multiple creatures
//! accumulate in one `en_us.json` across repeated runs, so the writer
//! unions these keys into whatever already exists on disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cobbleforge_core::SpeciesProfile;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;

/// Synthesize the localization entries for one species (MERGE policy).
pub fn lang_document(
    profile: &SpeciesProfile,
    namespace: &str,
) -> Result<SynthesizedDocument, DocError> {
    let id = &profile.id;
    let mut entries = BTreeMap::new();

    let _ = entries.insert(
        format!("{namespace}.species.{id}.name"),
        profile.display_name.clone(),
    );
    let _ = entries.insert(
        format!("{namespace}.species.{id}.desc1"),
        profile.desc1.clone().unwrap_or_else(|| {
            format!("A mysterious Pok\u{e9}mon known as {}.", profile.display_name)
        }),
    );
    let _ = entries.insert(
        format!("{namespace}.species.{id}.desc2"),
        profile
            .desc2
            .clone()
            .unwrap_or_else(|| "Customize this description in the language file!".to_string()),
    );

    Ok(SynthesizedDocument {
        kind: DocumentKind::Lang,
        relative_path: PathBuf::from(format!("resource_pack/assets/{namespace}/lang/en_us.json")),
        content: serde_json::to_value(entries)?,
        policy: WritePolicy::Merge,
    })
}
