//! Manifest data model and JSON writer
//!
//! Field names and nesting are a compatibility contract with downstream
//! consumers: `version`, `source`, `sections[].section`, `sections[].url`,
//! `sections[].pages[].title|url|anchors`, `anchors[].title|url`.

use crate::output::{OutputError, OutputResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Build time format of the manifest `version`
pub const VERSION_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A deep-link target within an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub title: String,
    pub url: String,
}

/// An article and its anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub url: String,
    pub anchors: Vec<Anchor>,
}

/// A top-level category and its articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "section")]
    pub title: String,
    pub url: String,
    pub pages: Vec<Page>,
}

/// The complete site map produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub source: String,
    pub sections: Vec<Section>,
}

impl Manifest {
    /// Creates a manifest stamped with the current build time (UTC)
    pub fn new(source: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            version: chrono::Utc::now().format(VERSION_FORMAT).to_string(),
            source: source.into(),
            sections,
        }
    }

    pub fn page_count(&self) -> usize {
        self.sections.iter().map(|s| s.pages.len()).sum()
    }

    pub fn anchor_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.pages)
            .map(|p| p.anchors.len())
            .sum()
    }
}

/// Writes the manifest as pretty-printed UTF-8 JSON
///
/// The document is written to a sibling temporary file and renamed into
/// place, so readers never observe a half-written manifest. Missing parent
/// directories are created.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> OutputResult<()> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json.as_bytes())?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        OutputError::Io(e)
    })?;

    Ok(())
}

/// Reads a manifest back from disk
pub fn read_manifest(path: &Path) -> OutputResult<Manifest> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
