//! Asset relocation and conservative cleanup.
//!
//! Copies classified assets into the canonical pack layout (never moves),
//! overwriting prior files at the destination. Textures are named
//! positionally: the first becomes the base variant, the second the shiny
//! variant, any further ones keep their original names, matching the
//! texture paths the resolver document declares.
//!
//! Cleanup deletes originals only under invariants that hold
//! unconditionally: never a protected source file, never a path outside
//! the scan root, and a file that is already gone is simply not an error.
//! A skipped deletion is reported, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use cobbleforge_core::SpeciesId;
use tracing::{info, warn};

use crate::assets::{is_protected, AssetCategory, ScannedAssets};
use crate::errors::PackError;
use crate::PackConfig;

/// One copied asset.
#[derive(Debug, Clone)]
pub struct RelocatedAsset {
    /// The asset's bucket.
    pub category: AssetCategory,
    /// Where it was copied from.
    pub source: PathBuf,
    /// Where it was copied to.
    pub destination: PathBuf,
}

/// Why a deletion was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file carries a protected source extension.
    ProtectedSource,
    /// The file is not a descendant of the scan root.
    OutsideScanRoot,
    /// Removal itself failed (permissions, etc.).
    RemoveFailed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProtectedSource => write!(f, "protected source file"),
            Self::OutsideScanRoot => write!(f, "outside the scan root"),
            Self::RemoveFailed(e) => write!(f, "removal failed: {e}"),
        }
    }
}

/// A deletion that was not performed, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeletion {
    /// The file left in place.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Copy every classified asset into the pack layout.
///
/// "Other" files are not relocated; they have no canonical destination.
/// Any copy failure aborts relocation (cleanup must never run against a
/// partially copied set).
pub fn relocate_assets(
    assets: &ScannedAssets,
    species: &SpeciesId,
    config: &PackConfig,
) -> Result<Vec<RelocatedAsset>, PackError> {
    let ns = &config.namespace;
    let bedrock = config
        .base_dir
        .join(format!("resource_pack/assets/{ns}/bedrock/pokemon"));
    let mut relocated = Vec::new();

    for source in &assets.animations {
        let destination = bedrock
            .join("animations")
            .join(species.as_str())
            .join(format!("{species}_animation.json"));
        copy(source, &destination)?;
        relocated.push(RelocatedAsset {
            category: AssetCategory::Animation,
            source: source.clone(),
            destination,
        });
    }

    for source in &assets.models {
        let destination = bedrock
            .join("models")
            .join(species.as_str())
            .join(format!("{species}_geo.json"));
        copy(source, &destination)?;
        relocated.push(RelocatedAsset {
            category: AssetCategory::Model,
            source: source.clone(),
            destination,
        });
    }

    let texture_dir = config
        .base_dir
        .join(format!("resource_pack/assets/{ns}/textures/pokemon"))
        .join(species.as_str());
    for (index, source) in assets.textures.iter().enumerate() {
        let name = match index {
            0 => format!("{species}.png"),
            1 => format!("{species}_shiny.png"),
            _ => source
                .file_name()
                .map_or_else(|| format!("{species}_extra.png"), |n| n.to_string_lossy().to_string()),
        };
        let destination = texture_dir.join(name);
        copy(source, &destination)?;
        relocated.push(RelocatedAsset {
            category: AssetCategory::Texture,
            source: source.clone(),
            destination,
        });
    }

    info!(count = relocated.len(), species = %species, "relocated assets");
    Ok(relocated)
}

fn copy(source: &Path, destination: &Path) -> Result<(), PackError> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| PackError::io(parent, e))?;
    }
    let _ = fs::copy(source, destination).map_err(|e| PackError::io(source, e))?;
    Ok(())
}

/// Delete the scanned originals, under the safety invariants.
///
/// Returns how many files were removed and which deletions were skipped.
/// Never fails: every problem is a skip, not an error.
pub fn cleanup_sources(assets: &ScannedAssets) -> (usize, Vec<SkippedDeletion>) {
    let mut removed = 0;
    let mut skipped = Vec::new();

    // Canonicalize once; the scan root was a real directory at scan time.
    let root = assets
        .scan_root
        .canonicalize()
        .unwrap_or_else(|_| assets.scan_root.clone());

    for file in assets.all_files() {
        if is_protected(file) {
            warn!(path = %file.display(), "refusing to delete protected source file");
            skipped.push(SkippedDeletion {
                path: file.clone(),
                reason: SkipReason::ProtectedSource,
            });
            continue;
        }

        // Already gone is not an error; nothing to do.
        let Ok(resolved) = file.canonicalize() else { continue };
        if !resolved.starts_with(&root) {
            warn!(path = %file.display(), "refusing to delete file outside the scan root");
            skipped.push(SkippedDeletion {
                path: file.clone(),
                reason: SkipReason::OutsideScanRoot,
            });
            continue;
        }

        match fs::remove_file(&resolved) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %resolved.display(), error = %e, "failed to delete source file");
                skipped.push(SkippedDeletion {
                    path: file.clone(),
                    reason: SkipReason::RemoveFailed(e.to_string()),
                });
            }
        }
    }

    (removed, skipped)
}
