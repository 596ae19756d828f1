//! Scaffold persistence with skip-unless-forced semantics.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Component;
use crate::fs::FileSystem;
use crate::generator::render_test_class;

/// Result of one batch of scaffold writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteReport {
    /// Paths written (created or force-overwritten).
    pub written: Vec<PathBuf>,
    /// Paths skipped because the destination already existed.
    pub skipped: Vec<PathBuf>,
    /// Per-unit write failures; the batch continues past them.
    pub errors: Vec<String>,
}

/// Render and persist a scaffold for each component under `test_root`.
///
/// Existing destinations are skipped unless `force` is set. Writes are
/// best-effort: a failure for one component is recorded and the batch moves
/// on to the next.
pub fn write_scaffolds<F: FileSystem>(
    fs: &F,
    components: &[Component],
    test_root: &Path,
    force: bool,
) -> WriteReport {
    let mut report = WriteReport::default();

    for component in components {
        let destination = component.test_path(test_root);
        if fs.path_exists(&destination) && !force {
            report.skipped.push(destination);
            continue;
        }

        if let Some(parent) = destination.parent() {
            if let Err(err) = fs.create_dir_all(parent) {
                report
                    .errors
                    .push(format!("{}: {err}", destination.display()));
                continue;
            }
        }

        let contents = render_test_class(component);
        match fs.write_string(&destination, &contents) {
            Ok(()) => report.written.push(destination),
            Err(err) => report
                .errors
                .push(format!("{}: {err}", destination.display())),
        }
    }

    report
}
