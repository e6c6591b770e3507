//! Crawler module for page fetching and manifest assembly
//!
//! This module contains the core crawling logic, including:
//! - The page fetcher boundary and its HTTP implementation
//! - Walking category hierarchies and paginated listings
//! - Overall manifest orchestration with per-unit failure isolation

mod coordinator;
mod fetcher;
mod walker;

pub use coordinator::{ArticleError, BuildReport, CategoryError, ManifestBuilder};
pub use fetcher::{build_http_client, FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use walker::{CategoryArticles, HierarchyWalker, WalkError};

use crate::config::Config;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for building a manifest. It will:
/// 1. Build the HTTP fetcher
/// 2. Compile the extractors for the configured site
/// 3. Discover categories, walk them, and extract every article
///
/// # Example
///
/// ```no_run
/// use support_atlas::config::Config;
/// use support_atlas::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl(&Config::default()).await?;
/// println!("{} pages", report.stats.pages);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config) -> crate::Result<BuildReport> {
    let fetcher = HttpFetcher::new(&config.fetch)?;
    ManifestBuilder::from_config(fetcher, config)?.build().await
}
