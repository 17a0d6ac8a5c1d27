//! Batch extract / repack operations
//!
//! Discovers containers and documents with walkdir and processes them in
//! parallel. Files are independent, so a failure in one never aborts the
//! rest; everything is collected into a run summary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{ExtractOutcome, extract_scw_to_text, repack_text_to_scw};
use crate::encoding::TextCodec;

/// Progress of a batch run, reported once per file.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// 1-based position of the file being processed.
    pub current: usize,
    /// Total files in the run.
    pub total: usize,
    /// Path relative to the source base, for display.
    pub file: String,
}

/// Summary of a batch operation.
#[derive(Debug, Clone, Default)]
pub struct BatchScriptResult {
    /// Files converted successfully.
    pub success_count: usize,
    /// Files that failed with an error.
    pub fail_count: usize,
    /// Files skipped (no text to extract, or no matching container).
    pub skipped_count: usize,
    /// Encoding substitution warnings across all files.
    pub warning_count: usize,
    /// One message per file processed.
    pub results: Vec<String>,
}

impl BatchScriptResult {
    /// Total files this run looked at.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.success_count + self.fail_count + self.skipped_count
    }
}

/// Find all container candidates in a directory recursively.
///
/// SCW containers ship without a file extension, so every extension-less
/// regular file is a candidate. Returns a sorted list.
pub fn find_script_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file() && e.path().extension().is_none())
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Find all `.txt` documents in a directory recursively, sorted.
pub fn find_document_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Batch extract containers in parallel.
///
/// Each container produces `<name>.txt` under `dest_base`, mirroring its
/// position relative to `source_base`.
pub fn batch_extract<F>(
    scripts: &[PathBuf],
    source_base: &Path,
    dest_base: &Path,
    codec: &TextCodec,
    progress: F,
) -> BatchScriptResult
where
    F: Fn(&BatchProgress) + Send + Sync,
{
    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = scripts.len();

    let results: Vec<String> = scripts
        .par_iter()
        .map(|scw_path| {
            let relative = scw_path
                .strip_prefix(source_base)
                .unwrap_or(scw_path.as_path());
            let display = relative.to_string_lossy();

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&BatchProgress {
                current,
                total,
                file: display.to_string(),
            });

            let dest = dest_base.join(relative).with_extension("txt");
            if let Some(parent) = dest.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    failed.fetch_add(1, Ordering::SeqCst);
                    return format!("Failed to create folder for {display}: {e}");
                }
            }

            match extract_scw_to_text(scw_path, &dest, codec) {
                Ok(ExtractOutcome::Extracted(count)) => {
                    success.fetch_add(1, Ordering::SeqCst);
                    format!("Extracted {count} strings: {display}")
                }
                Ok(ExtractOutcome::SkippedNoText) => {
                    skipped.fetch_add(1, Ordering::SeqCst);
                    format!("Skipped (no text): {display}")
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::SeqCst);
                    format!("Failed {display}: {e}")
                }
            }
        })
        .collect();

    BatchScriptResult {
        success_count: success.load(Ordering::SeqCst),
        fail_count: failed.load(Ordering::SeqCst),
        skipped_count: skipped.load(Ordering::SeqCst),
        warning_count: 0,
        results,
    }
}

/// Batch repack documents in parallel.
///
/// Each document is paired by base filename with a container found anywhere
/// under `script_base` (the original tool's convention). Rebuilt containers
/// land under `dest_base`, mirroring the document's position relative to
/// `text_base`. Documents with no matching container are counted as skipped
/// with a warning message.
pub fn batch_repack<F>(
    documents: &[PathBuf],
    script_base: &Path,
    text_base: &Path,
    dest_base: &Path,
    codec: &TextCodec,
    progress: F,
) -> BatchScriptResult
where
    F: Fn(&BatchProgress) + Send + Sync,
{
    // Base filename -> container path, like the original tool's SCR scan
    let scripts: HashMap<String, PathBuf> = find_script_files(script_base)
        .into_iter()
        .filter_map(|p| {
            p.file_name()
                .map(|n| (n.to_string_lossy().into_owned(), p.clone()))
        })
        .collect();

    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let warnings = AtomicUsize::new(0);
    let total = documents.len();

    let results: Vec<String> = documents
        .par_iter()
        .map(|txt_path| {
            let relative = txt_path
                .strip_prefix(text_base)
                .unwrap_or(txt_path.as_path());
            let display = relative.to_string_lossy();

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&BatchProgress {
                current,
                total,
                file: display.to_string(),
            });

            let base_name = txt_path
                .file_stem()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let Some(scw_path) = scripts.get(&base_name) else {
                skipped.fetch_add(1, Ordering::SeqCst);
                tracing::warn!("no container found for {}", relative.display());
                return format!("No container for {display}");
            };

            let dest = dest_base.join(relative).with_extension("");
            match dest
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .map_err(crate::error::Error::from)
                .and_then(|()| repack_text_to_scw(scw_path, txt_path, &dest, codec))
            {
                Ok(outcome) => {
                    success.fetch_add(1, Ordering::SeqCst);
                    warnings.fetch_add(outcome.warnings.len(), Ordering::SeqCst);
                    if outcome.warnings.is_empty() {
                        format!("Repacked: {display}")
                    } else {
                        format!(
                            "Repacked with {} encoding warnings: {display}",
                            outcome.warnings.len()
                        )
                    }
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::SeqCst);
                    format!("Failed {display}: {e}")
                }
            }
        })
        .collect();

    BatchScriptResult {
        success_count: success.load(Ordering::SeqCst),
        fail_count: failed.load(Ordering::SeqCst),
        skipped_count: skipped.load(Ordering::SeqCst),
        warning_count: warnings.load(Ordering::SeqCst),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::scw::test_support::{ContainerSpec, build_container};
    use pretty_assertions::assert_eq;

    fn write_tree(dir: &Path) {
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("alpha"), build_container(&ContainerSpec::default())).unwrap();
        std::fs::write(
            dir.join("sub/beta"),
            build_container(&ContainerSpec {
                text_count: Some(0),
                ..ContainerSpec::default()
            }),
        )
        .unwrap();
        // has an extension, must be ignored by discovery
        std::fs::write(dir.join("notes.bak"), b"junk").unwrap();
    }

    #[test]
    fn test_find_script_files_only_extensionless() {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path());
        let found = find_script_files(dir.path());
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_batch_extract_mirrors_structure_and_isolates_failures() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_tree(src.path());
        // a corrupt container must not abort the batch
        std::fs::write(src.path().join("broken"), b"not a container").unwrap();

        let scripts = find_script_files(src.path());
        let result = batch_extract(
            &scripts,
            src.path(),
            dst.path(),
            &TextCodec::shift_jis(),
            |_| {},
        );

        assert_eq!(result.success_count, 1);
        assert_eq!(result.fail_count, 1);
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.processed(), 3);
        assert!(dst.path().join("alpha.txt").exists());
        assert!(!dst.path().join("sub/beta.txt").exists());
    }

    #[test]
    fn test_batch_repack_pairs_by_base_name() {
        let src = tempfile::tempdir().unwrap();
        let txt = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let codec = TextCodec::shift_jis();

        write_tree(src.path());
        let scripts = find_script_files(src.path());
        batch_extract(&scripts, src.path(), txt.path(), &codec, |_| {});
        // document with no container anywhere under src
        std::fs::write(
            txt.path().join("orphan.txt"),
            "[Header]\nSTRING_COUNT = 1\nTEXT_COUNT = 1\nFILE_DESCRIPTION =\n\n[Index=1]\nx\n",
        )
        .unwrap();

        let documents = find_document_files(txt.path());
        let result = batch_repack(
            &documents,
            src.path(),
            txt.path(),
            out.path(),
            &codec,
            |_| {},
        );

        assert_eq!(result.success_count, 1);
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.fail_count, 0);
        assert!(out.path().join("alpha").exists());
        assert!(
            result
                .results
                .iter()
                .any(|m| m.contains("No container for orphan.txt"))
        );
    }
}
