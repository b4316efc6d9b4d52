//! # cobbleforge-docs
//!
//! Pure document synthesis: one function per pack file kind, mapping a
//! normalized [`SpeciesProfile`] (or a sparse [`SpeciesPatch`]) to a
//! [`SynthesizedDocument`] carrying the JSON content, the relative target
//! path, and the persistence policy the writer must apply.
//!
//! Nothing here touches the filesystem. Each document is built as typed
//! serde structs and converted to a `serde_json::Value` once, so the
//! absent-vs-default distinction the addition format depends on survives
//! serialization (`skip_serializing_if` on every optional field).
//!
//! Full definitions, posers, resolvers, spawn pools, and the localization
//! table are always synthesized in full. The addition document is the only
//! sparse one: a field missing from the patch is missing from the JSON,
//! which the game reads as "no change".

#![deny(unsafe_code)]

pub mod addition;
pub mod document;
pub mod errors;
pub mod lang;
pub mod meta;
pub mod poser;
pub mod resolver;
pub mod shapes;
pub mod spawn;
pub mod species;

pub use addition::addition_document;
pub use document::{DocumentKind, SynthesizedDocument, WritePolicy};
pub use errors::DocError;
pub use lang::lang_document;
pub use meta::pack_meta_documents;
pub use poser::poser_document;
pub use resolver::resolver_document;
pub use spawn::spawn_pool_document;
pub use species::species_document;

use cobbleforge_core::SpeciesProfile;

/// Synthesize the complete document set for a full species definition.
///
/// Species, poser, resolver, spawn pool, localization table, and both
/// pack metadata files, in write order.
pub fn full_document_set(
    profile: &SpeciesProfile,
    namespace: &str,
) -> Result<Vec<SynthesizedDocument>, DocError> {
    let mut documents = pack_meta_documents()?;
    documents.push(species_document(profile, namespace)?);
    documents.push(poser_document(profile, namespace)?);
    documents.push(resolver_document(profile, namespace)?);
    documents.push(spawn_pool_document(profile, namespace)?);
    documents.push(lang_document(profile, namespace)?);
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use cobbleforge_core::SpeciesAttributes;

    use super::*;

    #[test]
    fn full_set_contains_every_document_kind() {
        let (profile, _) = SpeciesAttributes::new("Flamebird", 999).normalize().unwrap();
        let documents = full_document_set(&profile, "cobblemon").unwrap();
        assert_eq!(documents.len(), 7);

        let kinds: Vec<DocumentKind> = documents.iter().map(|d| d.kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == DocumentKind::PackMeta).count(), 2);
        assert!(kinds.contains(&DocumentKind::Species));
        assert!(kinds.contains(&DocumentKind::Poser));
        assert!(kinds.contains(&DocumentKind::Resolver));
        assert!(kinds.contains(&DocumentKind::SpawnPool));
        assert!(kinds.contains(&DocumentKind::Lang));
    }

    #[test]
    fn full_set_is_deterministic() {
        let (profile, _) = SpeciesAttributes::new("Flamebird", 999).normalize().unwrap();
        let first = full_document_set(&profile, "cobblemon").unwrap();
        let second = full_document_set(&profile, "cobblemon").unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.relative_path, b.relative_path);
            assert_eq!(
                serde_json::to_string(&a.content).unwrap(),
                serde_json::to_string(&b.content).unwrap()
            );
        }
    }
}
