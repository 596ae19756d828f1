//! Domain entities for droidsmith.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default directory scanned for Android component sources.
pub const DEFAULT_SOURCE_ROOT: &str = "app/src/main/java";
/// Default directory generated tests are written under.
pub const DEFAULT_TEST_ROOT: &str = "app/src/test/java";
/// Default Gradle build descriptor augmented with JaCoCo wiring.
pub const DEFAULT_BUILD_FILE: &str = "app/build.gradle";

/// The closed set of Android component categories droidsmith recognizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// A type extending an `*Activity` base class.
    Activity,
    /// A type extending a `*Service` base class.
    Service,
    /// A type extending `BroadcastReceiver`.
    BroadcastReceiver,
    /// A type extending `ViewModel`.
    ViewModel,
}

impl ComponentKind {
    /// All recognized kinds, in classification order.
    pub fn all() -> [ComponentKind; 4] {
        [
            ComponentKind::Activity,
            ComponentKind::Service,
            ComponentKind::BroadcastReceiver,
            ComponentKind::ViewModel,
        ]
    }

    /// Stable display name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Activity => "Activity",
            ComponentKind::Service => "Service",
            ComponentKind::BroadcastReceiver => "BroadcastReceiver",
            ComponentKind::ViewModel => "ViewModel",
        }
    }

    /// Whether the kind participates in the Android lifecycle (and therefore
    /// gets context/intent doubles in generated tests).
    pub fn is_lifecycle(self) -> bool {
        matches!(
            self,
            ComponentKind::Activity | ComponentKind::Service | ComponentKind::BroadcastReceiver
        )
    }
}

/// One discovered Android component in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Simple class name captured from the declaration.
    pub name: String,
    /// Dotted package path; empty when the file has no package declaration.
    pub package: String,
    /// Source file the component was discovered in.
    pub source_path: PathBuf,
    /// Matched component category.
    pub kind: ComponentKind,
}

impl Component {
    /// Fully qualified class name.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Name of the generated test class.
    pub fn test_class_name(&self) -> String {
        format!("{}Test", self.name)
    }

    /// Canonical destination for the generated test, under `test_root` with
    /// the package split into path segments.
    pub fn test_path(&self, test_root: &Path) -> PathBuf {
        let mut path = test_root.to_path_buf();
        if !self.package.is_empty() {
            for segment in self.package.split('.') {
                path.push(segment);
            }
        }
        path.push(format!("{}.java", self.test_class_name()));
        path
    }
}

/// Aggregate coverage counts parsed from a JaCoCo report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Covered instruction count.
    pub covered: f64,
    /// Missed instruction count.
    pub missed: f64,
}

impl CoverageSummary {
    /// Total instrumented instructions.
    pub fn total(&self) -> f64 {
        self.covered + self.missed
    }

    /// Covered percentage in `[0, 100]`; zero when nothing was instrumented.
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0.0 {
            0.0
        } else {
            (self.covered / total) * 100.0
        }
    }
}
