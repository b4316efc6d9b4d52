//! Loose asset scanning and classification.
//!
//! Scans exactly one directory, non-recursively, and buckets files by
//! filename alone (no content sniffing): animation suffixes first, then
//! model suffixes gated on a model-indicating substring, then texture
//! suffixes, everything else to "other". A `.json` file without `geo` or
//! `model` in its name falls through to "other" rather than being misfiled
//! as a model.
//!
//! Entries are sorted by file name within each category so positional
//! destination naming (base vs shiny texture) is stable across
//! filesystems.

use std::fs;
use std::path::{Path, PathBuf};

use cobbleforge_core::Warning;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::PackError;

/// Filename suffixes recognized as animation files.
pub const ANIMATION_SUFFIXES: [&str; 2] = [".animation.json", ".animations.json"];
/// Filename suffixes recognized as model files (with a name-substring gate).
pub const MODEL_SUFFIXES: [&str; 2] = [".geo.json", ".json"];
/// Filename suffixes recognized as texture files.
pub const TEXTURE_SUFFIXES: [&str; 2] = [".png", ".tga"];

/// Extensions the scanner and the deleter refuse to touch: this tool's own
/// source extension, plus `.py` because the scripts this replaces lived
/// next to asset drops.
pub const PROTECTED_EXTENSIONS: [&str; 2] = ["rs", "py"];

/// Animations the game expects every creature to have.
const RECOMMENDED_ANIMATIONS: [&str; 2] = ["ground_idle", "ground_walk"];

/// Asset bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Bedrock animation file.
    Animation,
    /// Bedrock geometry file.
    Model,
    /// Texture image.
    Texture,
    /// Unrecognized file; relocated nowhere, only cleanup-eligible.
    Other,
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Animation => "animation",
            Self::Model => "model",
            Self::Texture => "texture",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Result of scanning one asset directory.
#[derive(Debug, Clone, Default)]
pub struct ScannedAssets {
    /// The scanned directory.
    pub scan_root: PathBuf,
    /// Animation files, sorted by name.
    pub animations: Vec<PathBuf>,
    /// Model files, sorted by name.
    pub models: Vec<PathBuf>,
    /// Texture files, sorted by name. The first becomes the base texture,
    /// the second the shiny variant.
    pub textures: Vec<PathBuf>,
    /// Everything else, sorted by name.
    pub other: Vec<PathBuf>,
    /// Advisory problems found while scanning.
    pub warnings: Vec<Warning>,
}

impl ScannedAssets {
    /// Whether the scan found nothing relocatable.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty() && self.models.is_empty() && self.textures.is_empty()
    }

    /// All scanned files across categories, cleanup candidates included.
    pub fn all_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.animations
            .iter()
            .chain(&self.models)
            .chain(&self.textures)
            .chain(&self.other)
    }
}

/// Classify one file name. First match wins.
fn classify(name: &str) -> AssetCategory {
    let lower = name.to_lowercase();
    if ANIMATION_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        AssetCategory::Animation
    } else if MODEL_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        // Plain .json without a model indicator is probably config, not
        // geometry; let it fall through rather than misfile it.
        if lower.contains("geo") || lower.contains("model") {
            AssetCategory::Model
        } else {
            AssetCategory::Other
        }
    } else if TEXTURE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        AssetCategory::Texture
    } else {
        AssetCategory::Other
    }
}

/// Scan `dir` (non-recursively) and bucket its files.
///
/// Skips directories, hidden files, and protected source extensions.
pub fn scan_assets(dir: &Path) -> Result<ScannedAssets, PackError> {
    if !dir.is_dir() {
        return Err(PackError::ScanRoot { path: dir.to_path_buf() });
    }

    let mut assets = ScannedAssets {
        scan_root: dir.to_path_buf(),
        ..ScannedAssets::default()
    };

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
            PackError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        if is_protected(entry.path()) {
            debug!(%name, "skipping protected source file");
            continue;
        }

        let path = entry.path().to_path_buf();
        match classify(&name) {
            AssetCategory::Animation => assets.animations.push(path),
            AssetCategory::Model => assets.models.push(path),
            AssetCategory::Texture => assets.textures.push(path),
            AssetCategory::Other => assets.other.push(path),
        }
    }

    // Positional texture naming depends on order; directory iteration
    // order is filesystem-specific, so sort by name.
    assets.animations.sort();
    assets.models.sort();
    assets.textures.sort();
    assets.other.sort();

    for animation in &assets.animations {
        if let Some(warning) = validate_animation(animation) {
            warn!(%warning, "animation validation");
            assets.warnings.push(warning);
        }
    }

    Ok(assets)
}

/// Whether a path carries a protected source extension.
pub fn is_protected(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PROTECTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Check an animation file for the recommended animations.
///
/// Keys look like `animation.<species>.ground_idle`; the animation name is
/// the last dot-separated part. Unreadable files are a warning, not an
/// error.
fn validate_animation(path: &Path) -> Option<Warning> {
    let file = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => return Some(Warning::UnreadableAnimation { file, reason: e.to_string() }),
    };
    let parsed: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => return Some(Warning::UnreadableAnimation { file, reason: e.to_string() }),
    };

    let found: Vec<&str> = parsed
        .get("animations")
        .and_then(serde_json::Value::as_object)
        .map(|animations| {
            animations
                .keys()
                .map(|key| key.rsplit('.').next().unwrap_or(key.as_str()))
                .collect()
        })
        .unwrap_or_default();

    let missing: Vec<String> = RECOMMENDED_ANIMATIONS
        .iter()
        .filter(|needed| !found.contains(*needed))
        .map(|needed| (*needed).to_string())
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(Warning::MissingAnimations { file, missing })
    }
}
