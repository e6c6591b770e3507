//! Configuration module for Support-Atlas
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default matching the reference documentation site, so a run
//! without a configuration file is valid.
//!
//! # Example
//!
//! ```no_run
//! use support_atlas::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("atlas.toml")).unwrap();
//! println!("Crawling categories under: {}", config.site.root);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ExtractConfig, FetchConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
