use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Support-Atlas
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

/// URL grammar of the crawled site
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Root prefix every category and article URL must live under
    pub root: String,

    /// Entry page listing the top-level categories
    pub guides: String,

    /// Path prefix (relative to root) of category URLs
    pub category_prefix: String,

    /// Path prefixes (relative to root) that are never articles
    pub reserved_prefixes: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "https://wordpress.com/support/".to_string(),
            guides: "https://wordpress.com/support/guides/".to_string(),
            category_prefix: "category/".to_string(),
            reserved_prefixes: [
                "category/",
                "tag/",
                "author/",
                "type/",
                "page/",
                "wp-json",
                "search",
                "embed/",
                "amp/",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Pause inserted after every request (milliseconds)
    pub delay_ms: u64,

    /// Upper bound on pages followed through a single listing's pagination
    pub max_listing_pages: u32,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "WP-NavTool-Scraper/1.1 (+https://github.com/)".to_string(),
            timeout_secs: 30,
            delay_ms: 350,
            max_listing_pages: 50,
        }
    }
}

/// CSS selectors and text rules used by the extractors
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractConfig {
    /// Landmarks identifying the main-content region, first match wins
    pub main_content: Vec<String>,

    /// Anchors inside recognized article-title structures (tier 1)
    pub article_title: Vec<String>,

    /// "Next page" links, in priority order
    pub pagination_next: Vec<String>,

    /// Link texts that are navigation chrome, never articles or subcategories
    pub boilerplate: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            main_content: vec![
                "main".to_string(),
                "#primary".to_string(),
                ".site-main".to_string(),
            ],
            article_title: vec![
                ".entry-title a[href]".to_string(),
                "article .entry-title a[href]".to_string(),
                ".card a[href]:not([rel~=category])".to_string(),
            ],
            pagination_next: vec![
                "a[rel=\"next\"]".to_string(),
                "a.next".to_string(),
                ".pagination a.next, .nav-links a.next".to_string(),
            ],
            boilerplate: vec!["contact us".to_string(), "browse our guides".to_string()],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path of the JSON manifest
    pub manifest_path: String,

    /// Optional path of a markdown table of contents
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest_path: "support-links.json".to_string(),
            summary_path: None,
        }
    }
}
