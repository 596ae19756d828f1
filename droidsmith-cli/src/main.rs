#![deny(missing_docs)]
//! droidsmith command-line interface.
//!
//! Scans an Android project for components, writes Mockito test scaffolds,
//! wires JaCoCo coverage reporting into Gradle, and summarizes JaCoCo XML
//! reports. All actions compose in a single invocation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use droidsmith_core::{
    Component, DEFAULT_BUILD_FILE, DEFAULT_SOURCE_ROOT, DEFAULT_TEST_ROOT, FileSystem, RunReport,
    ScanOutcome, StdFileSystem, classify_file, ensure_jacoco, is_supported_source, parse_coverage,
    render_json, render_text, resolve_against_root, scan, write_scaffolds,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "droidsmith",
    version,
    about = "Android unit test scaffolding and coverage helper"
)]
struct Cli {
    /// Root of the Android project.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
    /// Source directory to scan, relative to the project root unless absolute.
    #[arg(long, default_value = DEFAULT_SOURCE_ROOT)]
    source_root: PathBuf,
    /// Directory generated tests are written under, resolved like --source-root.
    #[arg(long, default_value = DEFAULT_TEST_ROOT)]
    test_root: PathBuf,
    /// Classify a single source file instead of scanning the source tree.
    #[arg(long)]
    source_file: Option<PathBuf>,
    /// Overwrite existing test files.
    #[arg(long)]
    force: bool,
    /// Ensure JaCoCo HTML reporting is configured in the Gradle build file.
    #[arg(long)]
    jacoco: bool,
    /// Gradle build file to augment; defaults to app/build.gradle under the
    /// project root.
    #[arg(long)]
    build_file: Option<PathBuf>,
    /// Path to a JaCoCo XML report to summarize.
    #[arg(long)]
    coverage_report: Option<PathBuf>,
    /// Output format for the run report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let fs = StdFileSystem::new();
    let mut report = RunReport::default();

    let test_root = resolve_against_root(&cli.project_root, &cli.test_root);

    if let Some(source_file) = &cli.source_file {
        let target = resolve_against_root(&cli.project_root, source_file);
        let supported = is_supported_source(&target) && fs.path_exists(&target);
        if !supported {
            eprintln!("Skipping unsupported or missing file: {}", target.display());
        }
        let mut read_errors = Vec::new();
        let components = match classify_file(&fs, &target) {
            Ok(components) => components,
            Err(err) => {
                read_errors.push(format!("{}: {err}", target.display()));
                Vec::new()
            }
        };
        report.writes = Some(write_scaffolds(&fs, &components, &test_root, cli.force));
        let mut outcome = single_file_outcome(components, supported);
        outcome.errors = read_errors;
        report.scan = Some(outcome);
    } else {
        let outcome = scan(&fs, &cli.project_root, &cli.source_root)?;
        report.writes = Some(write_scaffolds(
            &fs,
            &outcome.components,
            &test_root,
            cli.force,
        ));
        report.scan = Some(outcome);
    }

    if cli.jacoco {
        let build_file = cli
            .build_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_FILE));
        let build_file = resolve_against_root(&cli.project_root, &build_file);
        report.jacoco = Some(ensure_jacoco(&fs, &build_file)?);
    }

    if let Some(coverage_report) = &cli.coverage_report {
        let path = resolve_against_root(&cli.project_root, coverage_report);
        report.coverage = Some(parse_coverage(&fs, &path)?);
    }

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    let had_errors = report
        .scan
        .as_ref()
        .is_some_and(|scan| !scan.errors.is_empty())
        || report
            .writes
            .as_ref()
            .is_some_and(|writes| !writes.errors.is_empty());
    if had_errors {
        return Err("one or more files could not be processed".into());
    }
    Ok(())
}

fn single_file_outcome(components: Vec<Component>, supported: bool) -> ScanOutcome {
    ScanOutcome {
        components,
        files_seen: 1,
        files_skipped: usize::from(!supported),
        missing_source_root: false,
        errors: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, single_file_outcome};
    use clap::CommandFactory;
    use droidsmith_core::{Component, ComponentKind};
    use std::path::PathBuf;

    #[test]
    fn cli_arguments_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn single_file_outcome_counts_one_file() {
        let components = vec![Component {
            name: "LoginActivity".to_string(),
            package: "com.app".to_string(),
            source_path: PathBuf::from("LoginActivity.java"),
            kind: ComponentKind::Activity,
        }];
        let outcome = single_file_outcome(components, true);
        assert_eq!(outcome.files_seen, 1);
        assert_eq!(outcome.files_skipped, 0);
        assert_eq!(outcome.components.len(), 1);

        let skipped = single_file_outcome(Vec::new(), false);
        assert_eq!(skipped.files_skipped, 1);
        assert!(skipped.components.is_empty());
    }
}
