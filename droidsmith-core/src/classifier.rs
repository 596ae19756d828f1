//! Lexical component classification over raw source text.
//!
//! Classification is deliberately heuristic: one regular expression per kind
//! matches a class declaration whose header (everything before the body
//! opens) carries an `extends`/`:` clause referencing a supertype with the
//! kind's suffix. Headers may span newlines. No parsing, no type resolution;
//! a type merely named like a base class (e.g. `BarActivity`) matches too.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tokei::{Config, LanguageType};

use crate::domain::{Component, ComponentKind};
use crate::error::Result;
use crate::fs::FileSystem;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

// `[^{;]*?` keeps the inheritance clause inside the declaration header while
// still tolerating headers that wrap across lines.
fn regex_activity() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\bclass\s+(\w+)[^{;]*?(?:extends|:)\s+[\w.]*?\w*Activity\b"))
}

fn regex_service() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\bclass\s+(\w+)[^{;]*?(?:extends|:)\s+[\w.]*?\w*Service\b"))
}

fn regex_broadcast_receiver() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\bclass\s+(\w+)[^{;]*?(?:extends|:)\s+[\w.]*?BroadcastReceiver\b"))
}

fn regex_view_model() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\bclass\s+(\w+)[^{;]*?(?:extends|:)\s+[\w.]*?ViewModel\b"))
}

fn regex_package() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?m)^\s*package\s+([\w.]+)"))
}

fn kind_pattern(kind: ComponentKind) -> &'static Regex {
    match kind {
        ComponentKind::Activity => regex_activity(),
        ComponentKind::Service => regex_service(),
        ComponentKind::BroadcastReceiver => regex_broadcast_receiver(),
        ComponentKind::ViewModel => regex_view_model(),
    }
}

/// Match each recognized kind against the full file text.
///
/// Kinds are evaluated independently; the first occurrence per kind wins, so
/// a file can yield at most one fragment per kind and zero when nothing
/// matches.
pub fn classify_source(text: &str) -> Vec<(String, ComponentKind)> {
    let mut fragments = Vec::new();
    for kind in ComponentKind::all() {
        let Some(captures) = kind_pattern(kind).captures(text) else {
            continue;
        };
        if let Some(name) = captures.get(1) {
            fragments.push((name.as_str().to_string(), kind));
        }
    }
    fragments
}

/// Extract the leading package declaration, or empty when absent.
pub fn extract_package(text: &str) -> String {
    regex_package()
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|package| package.as_str().to_string())
        .unwrap_or_default()
}

/// Whether the path points at a source language droidsmith understands.
pub fn is_supported_source(path: &Path) -> bool {
    matches!(
        LanguageType::from_path(path, &Config::default()),
        Some(LanguageType::Java | LanguageType::Kotlin)
    )
}

/// Classify a single source file into components.
///
/// Unsupported and missing files yield an empty result so the caller can
/// report the skip; they are never an error.
pub fn classify_file<F: FileSystem>(fs: &F, path: &Path) -> Result<Vec<Component>> {
    if !is_supported_source(path) || !fs.path_exists(path) {
        return Ok(Vec::new());
    }

    let text = fs.read_to_string(path)?;
    let package = extract_package(&text);
    let components = classify_source(&text)
        .into_iter()
        .map(|(name, kind)| Component {
            name,
            package: package.clone(),
            source_path: path.to_path_buf(),
            kind,
        })
        .collect();
    Ok(components)
}
