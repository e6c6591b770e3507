//! Output module for the manifest and run reports
//!
//! This module handles:
//! - The manifest data model and its JSON serialization
//! - An optional markdown table of contents
//! - Run statistics

mod manifest;
mod markdown;
pub mod stats;

pub use manifest::{read_manifest, write_manifest, Anchor, Manifest, Page, Section, VERSION_FORMAT};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, BuildStatistics, DroppedArticle, SkippedCategory};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
