//! Support-Atlas: a documentation site mapper
//!
//! This crate crawls a documentation site organized as categories, articles and
//! in-page anchors, and assembles the hierarchy into a single ordered manifest
//! for downstream navigation tooling.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod url;

use thiserror::Error;

/// Run-fatal error type for Support-Atlas operations
///
/// Anything that reaches this type aborts the run without producing a manifest.
/// Category and article failures are handled inside the builder and never
/// surface here.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch entry page {url}: {source}")]
    EntryPage {
        url: String,
        source: crawler::FetchError,
    },

    #[error("No categories found on entry page {url}")]
    NoCategories { url: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Result type alias for Support-Atlas operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{BuildReport, HttpFetcher, ManifestBuilder, PageFetcher};
pub use output::{Anchor, Manifest, Page, Section};
pub use crate::url::SiteGrammar;
