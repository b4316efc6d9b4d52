//! Pack metadata (`pack.mcmeta`) synthesis.
//!
//! CREATE_IF_ABSENT policy: re-running the tool never clobbers pack
//! metadata a user has hand-edited. Formats target Minecraft 1.21.1; the
//! packs can only be combined into one folder when both formats match.

use std::path::PathBuf;

use serde::Serialize;

use crate::document::{DocumentKind, SynthesizedDocument, WritePolicy};
use crate::errors::DocError;

/// Resource pack format for 1.21.1.
pub const RESOURCE_PACK_FORMAT: u32 = 34;
/// Data pack format for 1.21.1.
pub const DATA_PACK_FORMAT: u32 = 48;

#[derive(Debug, Serialize)]
struct McmetaDoc {
    pack: PackSection,
}

#[derive(Debug, Serialize)]
struct PackSection {
    pack_format: u32,
    description: String,
}

fn mcmeta(relative_path: &str, format: u32, description: &str) -> Result<SynthesizedDocument, DocError> {
    Ok(SynthesizedDocument {
        kind: DocumentKind::PackMeta,
        relative_path: PathBuf::from(relative_path),
        content: serde_json::to_value(McmetaDoc {
            pack: PackSection { pack_format: format, description: description.to_string() },
        })?,
        policy: WritePolicy::CreateIfAbsent,
    })
}

/// Synthesize both pack metadata documents (CREATE_IF_ABSENT policy).
pub fn pack_meta_documents() -> Result<Vec<SynthesizedDocument>, DocError> {
    Ok(vec![
        mcmeta(
            "resource_pack/pack.mcmeta",
            RESOURCE_PACK_FORMAT,
            "Custom Species - Resource Pack",
        )?,
        mcmeta(
            "behavior_pack/pack.mcmeta",
            DATA_PACK_FORMAT,
            "Custom Species - Data Pack",
        )?,
    ])
}
