//! Document persistence.
//!
//! One write per document per run, per its declared policy. Parent
//! directories are created on demand. Writes are best-effort and
//! independent: no temp-file atomicity, no retries, and a failure on one
//! document never blocks its siblings (the pipeline records outcomes per
//! document).
//!
//! Not safe for concurrent runs against the same pack: the merge policy
//! is a non-atomic read-modify-write, and nothing locks the tree. One
//! invocation at a time.

use std::fs;
use std::path::Path;

use cobbleforge_docs::{SynthesizedDocument, WritePolicy};
use serde_json::Value;
use tracing::debug;

use crate::errors::PackError;

/// What happened to one document's target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new file was written.
    Created,
    /// An existing file was replaced.
    Overwritten,
    /// Existing content was shallow-merged with the new keys and rewritten.
    Merged,
    /// The file already existed and the policy left it untouched.
    SkippedExisting,
}

/// Write one synthesized document under `base`, per its policy.
pub fn write_document(
    base: &Path,
    document: &SynthesizedDocument,
) -> Result<WriteOutcome, PackError> {
    let target = base.join(&document.relative_path);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| PackError::io(parent, e))?;
    }

    let outcome = match document.policy {
        WritePolicy::Overwrite => {
            let existed = target.exists();
            write_json(&target, &document.content)?;
            if existed { WriteOutcome::Overwritten } else { WriteOutcome::Created }
        }
        WritePolicy::CreateIfAbsent => {
            if target.exists() {
                WriteOutcome::SkippedExisting
            } else {
                write_json(&target, &document.content)?;
                WriteOutcome::Created
            }
        }
        WritePolicy::Merge => {
            if target.exists() {
                let merged = merge_into_existing(&target, &document.content)?;
                write_json(&target, &merged)?;
                WriteOutcome::Merged
            } else {
                write_json(&target, &document.content)?;
                WriteOutcome::Created
            }
        }
    };

    debug!(path = %target.display(), ?outcome, "wrote document");
    Ok(outcome)
}

/// Shallow union of the new document's keys into the existing file.
///
/// New values win on collision. Key order in the output is alphabetical
/// (serde_json's default map), so repeated runs are deterministic.
fn merge_into_existing(target: &Path, new_content: &Value) -> Result<Value, PackError> {
    let raw = fs::read_to_string(target).map_err(|e| PackError::io(target, e))?;
    let existing: Value = serde_json::from_str(&raw).map_err(|e| PackError::MergeTarget {
        path: target.to_path_buf(),
        reason: format!("existing file is not valid JSON: {e}"),
    })?;

    let Value::Object(mut merged) = existing else {
        return Err(PackError::MergeTarget {
            path: target.to_path_buf(),
            reason: "existing file is not a JSON object".to_string(),
        });
    };
    let Value::Object(new_entries) = new_content else {
        return Err(PackError::MergeTarget {
            path: target.to_path_buf(),
            reason: "merge document is not a JSON object".to_string(),
        });
    };

    for (key, value) in new_entries {
        let _ = merged.insert(key.clone(), value.clone());
    }
    Ok(Value::Object(merged))
}

fn write_json(target: &Path, content: &Value) -> Result<(), PackError> {
    let encoded = serde_json::to_string_pretty(content).map_err(|e| PackError::MergeTarget {
        path: target.to_path_buf(),
        reason: format!("content is not serializable: {e}"),
    })?;
    fs::write(target, encoded).map_err(|e| PackError::io(target, e))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use assert_matches::assert_matches;
    use cobbleforge_docs::DocumentKind;
    use serde_json::json;

    use super::*;

    fn doc(path: &str, content: Value, policy: WritePolicy) -> SynthesizedDocument {
        SynthesizedDocument {
            kind: DocumentKind::Lang,
            relative_path: PathBuf::from(path),
            content,
            policy,
        }
    }

    fn read(base: &Path, path: &str) -> Value {
        serde_json::from_str(&fs::read_to_string(base.join(path)).unwrap()).unwrap()
    }

    #[test]
    fn overwrite_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let first = doc("a/b.json", json!({"x": 1}), WritePolicy::Overwrite);
        assert_eq!(write_document(dir.path(), &first).unwrap(), WriteOutcome::Created);

        let second = doc("a/b.json", json!({"x": 2}), WritePolicy::Overwrite);
        assert_eq!(write_document(dir.path(), &second).unwrap(), WriteOutcome::Overwritten);
        assert_eq!(read(dir.path(), "a/b.json"), json!({"x": 2}));
    }

    #[test]
    fn overwrite_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let document = doc("out.json", json!({"b": 2, "a": 1}), WritePolicy::Overwrite);
        let _ = write_document(dir.path(), &document).unwrap();
        let first = fs::read(dir.path().join("out.json")).unwrap();
        let _ = write_document(dir.path(), &document).unwrap();
        let second = fs::read(dir.path().join("out.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn create_if_absent_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pack.mcmeta"), r#"{"hand": "edited"}"#).unwrap();

        let document = doc("pack.mcmeta", json!({"pack": {}}), WritePolicy::CreateIfAbsent);
        assert_eq!(
            write_document(dir.path(), &document).unwrap(),
            WriteOutcome::SkippedExisting
        );
        assert_eq!(read(dir.path(), "pack.mcmeta"), json!({"hand": "edited"}));
    }

    #[test]
    fn create_if_absent_writes_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let document = doc("pack.mcmeta", json!({"pack": {}}), WritePolicy::CreateIfAbsent);
        assert_eq!(write_document(dir.path(), &document).unwrap(), WriteOutcome::Created);
    }

    #[test]
    fn merge_unions_keys_and_new_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lang.json"), r#"{"a": "1"}"#).unwrap();

        let document = doc("lang.json", json!({"b": "2"}), WritePolicy::Merge);
        assert_eq!(write_document(dir.path(), &document).unwrap(), WriteOutcome::Merged);
        assert_eq!(read(dir.path(), "lang.json"), json!({"a": "1", "b": "2"}));

        let collide = doc("lang.json", json!({"a": "2"}), WritePolicy::Merge);
        let _ = write_document(dir.path(), &collide).unwrap();
        assert_eq!(read(dir.path(), "lang.json"), json!({"a": "2", "b": "2"}));
    }

    #[test]
    fn merge_creates_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let document = doc("lang.json", json!({"a": "1"}), WritePolicy::Merge);
        assert_eq!(write_document(dir.path(), &document).unwrap(), WriteOutcome::Created);
    }

    #[test]
    fn merge_into_invalid_json_is_a_structural_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lang.json"), "not json at all").unwrap();
        let document = doc("lang.json", json!({"a": "1"}), WritePolicy::Merge);
        assert_matches!(
            write_document(dir.path(), &document),
            Err(PackError::MergeTarget { .. })
        );
    }

    #[test]
    fn merge_into_non_object_is_a_structural_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lang.json"), "[1, 2]").unwrap();
        let document = doc("lang.json", json!({"a": "1"}), WritePolicy::Merge);
        assert_matches!(
            write_document(dir.path(), &document),
            Err(PackError::MergeTarget { .. })
        );
    }

    #[test]
    fn merged_output_key_order_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lang.json"), r#"{"zebra": "1"}"#).unwrap();
        let document = doc("lang.json", json!({"apple": "2"}), WritePolicy::Merge);
        let _ = write_document(dir.path(), &document).unwrap();
        let raw = fs::read_to_string(dir.path().join("lang.json")).unwrap();
        assert!(raw.find("apple").unwrap() < raw.find("zebra").unwrap());
    }
}
