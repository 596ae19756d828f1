//! Idempotent JaCoCo wiring for Gradle build files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fs::FileSystem;

/// Canonical configuration block appended to a Gradle build file.
pub const JACOCO_SNIPPET: &str = r#"// Added by droidsmith
plugins { id 'jacoco' }

jacoco {
    toolVersion = "0.8.10"
}

tasks.withType(Test) {
    finalizedBy jacocoTestReport
}

jacocoTestReport {
    dependsOn test
    reports {
        xml.required = true
        csv.required = false
        html.required = true
    }
}
"#;

const PLUGIN_MARKER: &str = "jacoco";
const REPORT_TASK_MARKER: &str = "jacocoTestReport";

/// What `ensure_jacoco` found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JacocoStatus {
    /// The build file did not exist; nothing was changed.
    MissingBuildFile,
    /// Both marker tokens were already present; nothing was changed.
    AlreadyConfigured,
    /// The configuration block was appended.
    Appended,
}

/// Ensure the JaCoCo configuration block exists in the build file.
///
/// Purely additive: existing content is never rewritten, and a second run is
/// a no-op because the appended block carries both marker tokens.
pub fn ensure_jacoco<F: FileSystem>(fs: &F, build_file: &Path) -> Result<JacocoStatus> {
    if !fs.path_exists(build_file) {
        return Ok(JacocoStatus::MissingBuildFile);
    }

    let contents = fs.read_to_string(build_file)?;
    if contents.contains(REPORT_TASK_MARKER) && contents.contains(PLUGIN_MARKER) {
        return Ok(JacocoStatus::AlreadyConfigured);
    }

    let updated = format!("{}\n\n{}", contents.trim_end(), JACOCO_SNIPPET);
    fs.write_string(build_file, &updated)?;
    Ok(JacocoStatus::Appended)
}

#[cfg(test)]
mod tests {
    use super::{JacocoStatus, ensure_jacoco};
    use crate::fs::{FileSystem, StdFileSystem};
    use std::path::{Path, PathBuf};

    #[test]
    fn missing_build_file_is_reported_not_fatal() {
        let fs = StdFileSystem::new();
        let status = ensure_jacoco(&fs, Path::new("/nonexistent/build.gradle")).expect("ensure");
        assert_eq!(status, JacocoStatus::MissingBuildFile);
    }

    #[test]
    fn appends_configuration_once() {
        let root = temp_dir("append");
        let build_file = root.join("build.gradle");
        std::fs::write(&build_file, "apply plugin: 'com.android.application'\n")
            .expect("write build file");

        let fs = StdFileSystem::new();
        let first = ensure_jacoco(&fs, &build_file).expect("first run");
        assert_eq!(first, JacocoStatus::Appended);

        let after_first = std::fs::read_to_string(&build_file).expect("read back");
        assert!(after_first.starts_with("apply plugin: 'com.android.application'"));
        assert_eq!(after_first.matches("jacocoTestReport").count(), 2);
        assert!(after_first.contains("toolVersion = \"0.8.10\""));
        assert!(after_first.contains("html.required = true"));
        assert!(after_first.contains("csv.required = false"));

        let second = ensure_jacoco(&fs, &build_file).expect("second run");
        assert_eq!(second, JacocoStatus::AlreadyConfigured);
        let after_second = std::fs::read_to_string(&build_file).expect("read back");
        assert_eq!(after_first, after_second);

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn preexisting_configuration_is_left_alone() {
        let root = temp_dir("configured");
        let build_file = root.join("build.gradle");
        let contents = "plugins { id 'jacoco' }\njacocoTestReport { }\n";
        std::fs::write(&build_file, contents).expect("write build file");

        let fs = StdFileSystem::new();
        let status = ensure_jacoco(&fs, &build_file).expect("ensure");
        assert_eq!(status, JacocoStatus::AlreadyConfigured);
        assert_eq!(
            std::fs::read_to_string(&build_file).expect("read back"),
            contents
        );

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let root = std::env::temp_dir().join(format!("droidsmith_gradle_{tag}_{nanos}"));
        std::fs::create_dir_all(&root).expect("create temp dir");
        root
    }
}
