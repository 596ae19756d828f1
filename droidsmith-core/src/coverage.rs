//! JaCoCo XML report summarization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::CoverageSummary;
use crate::error::Result;
use crate::fs::FileSystem;

/// What the summarizer found at the report path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum CoverageOutcome {
    /// The report file did not exist.
    MissingReport,
    /// The report existed but could not be used, with the reason.
    Malformed(String),
    /// An instruction counter was found and summarized.
    Summary(CoverageSummary),
}

/// Parse a JaCoCo XML report and extract the instruction-level counter.
///
/// Only storage-level read failures surface as errors; a missing file,
/// unparseable XML, or a report without an instruction counter are all
/// recovered into the outcome. The counter must be a direct child of the
/// report root, matching JaCoCo's report-level totals.
pub fn parse_coverage<F: FileSystem>(fs: &F, report: &Path) -> Result<CoverageOutcome> {
    if !fs.path_exists(report) {
        return Ok(CoverageOutcome::MissingReport);
    }

    let text = fs.read_to_string(report)?;
    let document = match roxmltree::Document::parse(&text) {
        Ok(document) => document,
        Err(err) => return Ok(CoverageOutcome::Malformed(err.to_string())),
    };

    let root = document.root_element();
    let Some(counter) = root.children().find(|node| {
        node.is_element()
            && node.has_tag_name("counter")
            && node.attribute("type") == Some("INSTRUCTION")
    }) else {
        return Ok(CoverageOutcome::Malformed(
            "no instruction counter found".to_string(),
        ));
    };

    let covered = match parse_count(counter.attribute("covered")) {
        Ok(value) => value,
        Err(reason) => return Ok(CoverageOutcome::Malformed(reason)),
    };
    let missed = match parse_count(counter.attribute("missed")) {
        Ok(value) => value,
        Err(reason) => return Ok(CoverageOutcome::Malformed(reason)),
    };

    Ok(CoverageOutcome::Summary(CoverageSummary { covered, missed }))
}

fn parse_count(value: Option<&str>) -> std::result::Result<f64, String> {
    match value {
        None => Ok(0.0),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("invalid counter value: {raw}")),
    }
}
