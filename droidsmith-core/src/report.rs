//! Run report aggregation and rendering.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageOutcome;
use crate::gradle::JacocoStatus;
use crate::scanner::ScanOutcome;
use crate::writer::WriteReport;

/// Everything one invocation did, for text or JSON emission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Discovery outcome, when a scan or single-file classification ran.
    pub scan: Option<ScanOutcome>,
    /// Scaffold write results, when generation ran.
    pub writes: Option<WriteReport>,
    /// Gradle augmentation status, when requested.
    pub jacoco: Option<JacocoStatus>,
    /// Coverage summarization outcome, when requested.
    pub coverage: Option<CoverageOutcome>,
}

/// Render the human-readable console summary.
pub fn render_text(report: &RunReport) -> String {
    let mut output = String::new();
    if let Some(scan) = &report.scan {
        append_scan(&mut output, scan);
    }
    if let Some(writes) = &report.writes {
        append_writes(&mut output, writes);
    }
    if let Some(status) = report.jacoco {
        append_jacoco(&mut output, status);
    }
    if let Some(coverage) = &report.coverage {
        append_coverage(&mut output, coverage);
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_scan(output: &mut String, scan: &ScanOutcome) {
    if scan.missing_source_root {
        let _ = writeln!(output, "No source directory found. Nothing to scan.");
        return;
    }
    if scan.components.is_empty() {
        let _ = writeln!(
            output,
            "No Android components detected ({} file(s) seen, {} skipped).",
            scan.files_seen, scan.files_skipped
        );
    } else {
        let _ = writeln!(
            output,
            "Discovered {} Android component(s):",
            scan.components.len()
        );
        for component in &scan.components {
            let _ = writeln!(
                output,
                "  - {} ({})",
                component.qualified_name(),
                component.kind.display_name()
            );
        }
    }
    for error in &scan.errors {
        let _ = writeln!(output, "Read failed: {error}");
    }
}

fn append_writes(output: &mut String, writes: &WriteReport) {
    for path in &writes.written {
        let _ = writeln!(output, "Created {}", path.display());
    }
    for path in &writes.skipped {
        let _ = writeln!(
            output,
            "Skipping {} (already exists). Use --force to overwrite.",
            path.display()
        );
    }
    for error in &writes.errors {
        let _ = writeln!(output, "Write failed: {error}");
    }
}

fn append_jacoco(output: &mut String, status: JacocoStatus) {
    let line = match status {
        JacocoStatus::MissingBuildFile => {
            "Gradle build file not found; skipping JaCoCo integration."
        }
        JacocoStatus::AlreadyConfigured => "JaCoCo configuration already detected.",
        JacocoStatus::Appended => "Appended JaCoCo configuration to the Gradle build file.",
    };
    let _ = writeln!(output, "{line}");
}

fn append_coverage(output: &mut String, coverage: &CoverageOutcome) {
    match coverage {
        CoverageOutcome::MissingReport => {
            let _ = writeln!(output, "Coverage report not found.");
        }
        CoverageOutcome::Malformed(reason) => {
            let _ = writeln!(output, "Coverage report unusable: {reason}.");
        }
        CoverageOutcome::Summary(summary) => {
            let _ = writeln!(output, "Coverage summary (JaCoCo):");
            let _ = writeln!(output, "  Covered instructions: {}", summary.covered);
            let _ = writeln!(output, "  Missed instructions:  {}", summary.missed);
            let _ = writeln!(output, "  Coverage:             {:.2}%", summary.percentage());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RunReport, render_json, render_text};
    use crate::coverage::CoverageOutcome;
    use crate::domain::{Component, ComponentKind, CoverageSummary};
    use crate::gradle::JacocoStatus;
    use crate::scanner::ScanOutcome;
    use crate::writer::WriteReport;
    use std::path::PathBuf;

    fn sample_report() -> RunReport {
        RunReport {
            scan: Some(ScanOutcome {
                components: vec![Component {
                    name: "LoginActivity".to_string(),
                    package: "com.app".to_string(),
                    source_path: PathBuf::from("app/src/main/java/com/app/LoginActivity.java"),
                    kind: ComponentKind::Activity,
                }],
                files_seen: 3,
                files_skipped: 2,
                missing_source_root: false,
                errors: Vec::new(),
            }),
            writes: Some(WriteReport {
                written: vec![PathBuf::from("app/src/test/java/com/app/LoginActivityTest.java")],
                skipped: vec![PathBuf::from("app/src/test/java/com/app/OldActivityTest.java")],
                errors: Vec::new(),
            }),
            jacoco: Some(JacocoStatus::Appended),
            coverage: Some(CoverageOutcome::Summary(CoverageSummary {
                covered: 80.0,
                missed: 20.0,
            })),
        }
    }

    #[test]
    fn renders_full_text_summary() {
        let output = render_text(&sample_report());

        assert!(output.contains("Discovered 1 Android component(s):"));
        assert!(output.contains("  - com.app.LoginActivity (Activity)"));
        assert!(output.contains("Created app/src/test/java/com/app/LoginActivityTest.java"));
        assert!(output.contains("already exists). Use --force to overwrite."));
        assert!(output.contains("Appended JaCoCo configuration"));
        assert!(output.contains("Coverage:             80.00%"));
    }

    #[test]
    fn renders_nothing_to_scan_notice() {
        let report = RunReport {
            scan: Some(ScanOutcome {
                missing_source_root: true,
                ..ScanOutcome::default()
            }),
            ..RunReport::default()
        };
        let output = render_text(&report);
        assert!(output.contains("No source directory found. Nothing to scan."));
    }

    #[test]
    fn renders_scan_read_errors() {
        let report = RunReport {
            scan: Some(ScanOutcome {
                files_seen: 1,
                errors: vec!["/src/Broken.java: io error: invalid data".to_string()],
                ..ScanOutcome::default()
            }),
            ..RunReport::default()
        };
        let output = render_text(&report);
        assert!(output.contains("Read failed: /src/Broken.java"));
    }

    #[test]
    fn renders_missing_coverage_report_notice() {
        let report = RunReport {
            coverage: Some(CoverageOutcome::MissingReport),
            ..RunReport::default()
        };
        assert!(render_text(&report).contains("Coverage report not found."));
    }

    #[test]
    fn renders_json_with_camel_case_keys() {
        let json = render_json(&sample_report()).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed["scan"]["filesSeen"], 3);
        assert_eq!(parsed["scan"]["components"][0]["name"], "LoginActivity");
        assert_eq!(parsed["jacoco"], "appended");
        assert_eq!(parsed["coverage"]["status"], "summary");
    }
}
