//! Directory scanning and component discovery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classifier::{classify_file, is_supported_source};
use crate::domain::Component;
use crate::error::Result;
use crate::fs::FileSystem;

/// Outcome of one discovery pass over a source tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    /// Components discovered, ordered by source path.
    pub components: Vec<Component>,
    /// Number of files visited.
    pub files_seen: usize,
    /// Number of files skipped as unsupported.
    pub files_skipped: usize,
    /// True when the resolved source directory did not exist.
    pub missing_source_root: bool,
    /// Per-file read failures; the scan continues past them.
    pub errors: Vec<String>,
}

/// Resolve a path against the project root unless it is already absolute.
pub fn resolve_against_root(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Walk the source tree under `source_root` (resolved against
/// `project_root`) and classify every supported file.
///
/// A missing source directory is not an error; the outcome records it so the
/// caller can report "nothing to scan". Paths are sorted before
/// classification so discovery order is deterministic. Classification is
/// best-effort: a file that cannot be read (e.g. undecodable bytes) is
/// recorded in the outcome and the scan moves on to the next file.
pub fn scan<F: FileSystem>(
    fs: &F,
    project_root: &Path,
    source_root: &Path,
) -> Result<ScanOutcome> {
    let source_root = resolve_against_root(project_root, source_root);
    if !fs.path_exists(&source_root) {
        return Ok(ScanOutcome {
            missing_source_root: true,
            ..ScanOutcome::default()
        });
    }

    let mut paths = fs.list_files(&source_root)?;
    paths.sort();

    let mut outcome = ScanOutcome::default();
    for path in paths {
        outcome.files_seen += 1;
        if !is_supported_source(&path) {
            outcome.files_skipped += 1;
            continue;
        }
        match classify_file(fs, &path) {
            Ok(components) => outcome.components.extend(components),
            Err(err) => outcome.errors.push(format!("{}: {err}", path.display())),
        }
    }
    Ok(outcome)
}
