//! Pack assembly: persistence policies, asset handling, and the
//! end-to-end pipelines that turn normalized species data into files
//! on disk.
//!
//! The pipelines isolate per-document failures: one document failing to
//! write is recorded in the report and the remaining documents still get
//! their chance. Warnings accumulated during normalization and asset
//! validation ride along in the reports; they never abort a run.
//!
//! ```no_run
//! use cobbleforge_core::SpeciesAttributes;
//! use cobbleforge_pack::{generate_pack, PackConfig};
//!
//! let attrs = SpeciesAttributes::new("drago", 2001);
//! let config = PackConfig::new("./my-pack".into());
//! let report = generate_pack(&attrs, &config)?;
//! assert!(report.success());
//! # Ok::<(), cobbleforge_pack::PackError>(())
//! ```

#![deny(unsafe_code)]

pub mod assets;
pub mod errors;
pub mod relocate;
pub mod writer;

use std::path::{Path, PathBuf};

use cobbleforge_core::{AdditionChanges, SpeciesAttributes, SpeciesId, Warning};
use cobbleforge_docs::{addition_document, full_document_set, DocumentKind};
use tracing::info;

pub use errors::PackError;
pub use relocate::{RelocatedAsset, SkipReason, SkippedDeletion};
pub use writer::WriteOutcome;

/// Where the pack lives and which namespace its files claim.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Root directory holding `resource_pack/` and `behavior_pack/`.
    pub base_dir: PathBuf,
    /// Namespace embedded in paths and identifiers.
    pub namespace: String,
}

impl PackConfig {
    /// Config rooted at `base_dir` with the standard namespace.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir, namespace: "cobblemon".to_string() }
    }

    /// Config with an explicit namespace.
    pub fn with_namespace(base_dir: PathBuf, namespace: impl Into<String>) -> Self {
        Self { base_dir, namespace: namespace.into() }
    }
}

/// How one document ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// A new file was written.
    Created,
    /// An existing file was replaced.
    Overwritten,
    /// Existing content was merged with the new keys.
    Merged,
    /// The file already existed and was left untouched.
    SkippedExisting,
    /// The write failed; the rest of the run continued.
    Failed(String),
}

impl From<WriteOutcome> for DocumentStatus {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Created => Self::Created,
            WriteOutcome::Overwritten => Self::Overwritten,
            WriteOutcome::Merged => Self::Merged,
            WriteOutcome::SkippedExisting => Self::SkippedExisting,
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Overwritten => write!(f, "overwritten"),
            Self::Merged => write!(f, "merged"),
            Self::SkippedExisting => write!(f, "kept existing"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// One document's fate in a pipeline run.
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    /// What kind of document this was.
    pub kind: DocumentKind,
    /// The path it was written to, relative to the pack root.
    pub path: PathBuf,
    /// What happened.
    pub status: DocumentStatus,
}

/// Result of a full-species generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The normalized identifier the run generated for.
    pub species: SpeciesId,
    /// Per-document outcomes, in synthesis order.
    pub documents: Vec<DocumentOutcome>,
    /// Non-fatal issues noticed while normalizing.
    pub warnings: Vec<Warning>,
}

impl GenerateReport {
    /// True when every document landed on disk.
    pub fn success(&self) -> bool {
        self.documents
            .iter()
            .all(|d| !matches!(d.status, DocumentStatus::Failed(_)))
    }
}

/// Result of a species-addition run.
#[derive(Debug)]
pub struct AdditionReport {
    /// The species the addition targets.
    pub target: SpeciesId,
    /// The written addition document.
    pub document: DocumentOutcome,
    /// Non-fatal issues noticed while normalizing the changes.
    pub warnings: Vec<Warning>,
}

impl AdditionReport {
    /// True when the addition landed on disk.
    pub fn success(&self) -> bool {
        !matches!(self.document.status, DocumentStatus::Failed(_))
    }
}

/// Result of an asset scan/relocate/cleanup run.
#[derive(Debug, Default)]
pub struct AssetReport {
    /// Copies performed, in category order.
    pub relocated: Vec<RelocatedAsset>,
    /// Originals removed during cleanup.
    pub deleted: usize,
    /// Deletions that were refused or failed, with reasons.
    pub skipped_deletions: Vec<SkippedDeletion>,
    /// Non-fatal issues noticed while scanning.
    pub warnings: Vec<Warning>,
}

impl AssetReport {
    /// True when the scan found nothing to relocate.
    pub fn is_empty(&self) -> bool {
        self.relocated.is_empty()
    }
}

/// Normalize `attrs` and write the complete document set for a new
/// species under `config.base_dir`.
///
/// Malformed input (empty name, bad hitbox, bad drop percentage) fails
/// before anything touches disk. Individual write failures are recorded
/// per document; check [`GenerateReport::success`].
pub fn generate_pack(
    attrs: &SpeciesAttributes,
    config: &PackConfig,
) -> Result<GenerateReport, PackError> {
    let (profile, warnings) = attrs.normalize()?;
    let documents = full_document_set(&profile, &config.namespace)?;
    let species = profile.id.clone();

    info!(species = %species, count = documents.len(), "writing species documents");
    let outcomes = documents
        .iter()
        .map(|doc| write_outcome(&config.base_dir, doc))
        .collect();

    Ok(GenerateReport { species, documents: outcomes, warnings })
}

/// How to amend an existing species.
#[derive(Debug, Clone)]
pub struct AdditionRequest {
    /// The species to amend, as entered by the caller.
    pub target: String,
    /// Namespace tag used in the addition file name.
    pub tag: String,
    /// The raw changes to apply.
    pub changes: AdditionChanges,
}

/// Normalize an addition request and write its species-addition
/// document under `config.base_dir`.
///
/// Each addition file stands alone; the game loader stacks additions
/// targeting the same species, so repeated edits with distinct tags
/// accumulate rather than overwrite.
pub fn create_addition(
    request: &AdditionRequest,
    config: &PackConfig,
) -> Result<AdditionReport, PackError> {
    let target = SpeciesId::new(&request.target)
        .ok_or(cobbleforge_core::ProfileError::EmptyName)?;
    let (patch, warnings) = request.changes.normalize(&target)?;
    let document = addition_document(&target, &patch, &config.namespace, &request.tag)?;

    info!(target = %target, "writing species addition");
    let outcome = write_outcome(&config.base_dir, &document);

    Ok(AdditionReport { target, document: outcome, warnings })
}

/// Scan `scan_dir` for species assets, copy them into the pack layout,
/// and optionally delete the originals.
///
/// Cleanup runs only after every copy succeeded; a skipped deletion is
/// reported, never fatal. An empty scan yields an empty report.
pub fn process_assets(
    scan_dir: &Path,
    species: &SpeciesId,
    config: &PackConfig,
    cleanup: bool,
) -> Result<AssetReport, PackError> {
    let scanned = assets::scan_assets(scan_dir)?;
    if scanned.is_empty() {
        return Ok(AssetReport { warnings: scanned.warnings, ..AssetReport::default() });
    }

    let relocated = relocate::relocate_assets(&scanned, species, config)?;
    let (deleted, skipped_deletions) = if cleanup {
        relocate::cleanup_sources(&scanned)
    } else {
        (0, Vec::new())
    };

    Ok(AssetReport { relocated, deleted, skipped_deletions, warnings: scanned.warnings })
}

fn write_outcome(base: &Path, document: &cobbleforge_docs::SynthesizedDocument) -> DocumentOutcome {
    let status = match writer::write_document(base, document) {
        Ok(outcome) => outcome.into(),
        Err(e) => DocumentStatus::Failed(e.to_string()),
    };
    DocumentOutcome {
        kind: document.kind,
        path: document.relative_path.clone(),
        status,
    }
}
