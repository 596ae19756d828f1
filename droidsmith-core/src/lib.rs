#![deny(missing_docs)]
//! droidsmith core library.
//!
//! Scans Android source trees for components (Activities, Services,
//! BroadcastReceivers, and ViewModels), renders Mockito-based unit test
//! scaffolds, keeps Gradle wired for JaCoCo coverage reporting, and
//! summarizes JaCoCo XML reports.

pub mod classifier;
pub mod coverage;
pub mod domain;
pub mod error;
pub mod fs;
pub mod generator;
pub mod gradle;
pub mod report;
pub mod scanner;
pub mod writer;

pub use classifier::{classify_file, classify_source, extract_package, is_supported_source};
pub use coverage::{CoverageOutcome, parse_coverage};
pub use domain::{
    Component, ComponentKind, CoverageSummary, DEFAULT_BUILD_FILE, DEFAULT_SOURCE_ROOT,
    DEFAULT_TEST_ROOT,
};
pub use error::{DroidsmithError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use generator::{generate_imports, render_test_class};
pub use gradle::{JACOCO_SNIPPET, JacocoStatus, ensure_jacoco};
pub use report::{RunReport, render_json, render_text};
pub use scanner::{ScanOutcome, resolve_against_root, scan};
pub use writer::{WriteReport, write_scaffolds};
