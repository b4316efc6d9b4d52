//! The synthesized document envelope.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

/// What a document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Full species definition.
    Species,
    /// Sparse species addition (patch).
    Addition,
    /// Animation-to-state pose mappings.
    Poser,
    /// Model/texture variant resolver.
    Resolver,
    /// World spawn configuration.
    SpawnPool,
    /// Localization table.
    Lang,
    /// Pack metadata (`pack.mcmeta`).
    PackMeta,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Species => "species definition",
            Self::Addition => "species addition",
            Self::Poser => "poser",
            Self::Resolver => "model resolver",
            Self::SpawnPool => "spawn pool",
            Self::Lang => "language file",
            Self::PackMeta => "pack metadata",
        };
        f.write_str(name)
    }
}

/// How the writer must treat an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace whatever exists.
    Overwrite,
    /// Write only when the path does not exist yet; never clobber
    /// hand-edited files.
    CreateIfAbsent,
    /// Shallow-union keys into the existing JSON object; new values win.
    Merge,
}

/// One document produced by a synthesis run.
///
/// Created fresh each run, never mutated afterwards, written exactly once
/// by the pack writer according to `policy`.
#[derive(Debug, Clone)]
pub struct SynthesizedDocument {
    /// What this document describes.
    pub kind: DocumentKind,
    /// Target path relative to the pack base directory.
    pub relative_path: PathBuf,
    /// The JSON content.
    pub content: Value,
    /// The persistence policy for this document.
    pub policy: WritePolicy,
}
