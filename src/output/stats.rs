//! Run statistics
//!
//! Counts and failure notices collected while building a manifest. These are
//! diagnostics only and never part of the manifest itself.

use crate::output::Manifest;

/// A category left out of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCategory {
    pub url: String,
    pub reason: String,
}

/// An article dropped from its section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedArticle {
    pub category: String,
    pub url: String,
    pub reason: String,
}

/// Statistics for one manifest build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStatistics {
    /// Categories discovered on the entry page
    pub categories_found: usize,

    /// Sections written to the manifest
    pub sections: usize,

    /// Pages across all sections
    pub pages: usize,

    /// Anchors across all pages
    pub anchors: usize,

    /// Listing pages that needed the fallback link scan
    pub listing_fallbacks: usize,

    /// Articles kept with a slug title and no anchors because their fetch failed
    pub degraded_pages: Vec<String>,

    pub dropped_articles: Vec<DroppedArticle>,

    pub skipped_categories: Vec<SkippedCategory>,
}

impl BuildStatistics {
    /// Fills the totals from the finished manifest
    pub fn record_manifest(&mut self, manifest: &Manifest) {
        self.sections = manifest.sections.len();
        self.pages = manifest.page_count();
        self.anchors = manifest.anchor_count();
    }

    /// True if every category and article made it in undegraded
    pub fn is_clean(&self) -> bool {
        self.degraded_pages.is_empty()
            && self.dropped_articles.is_empty()
            && self.skipped_categories.is_empty()
    }
}

/// Prints statistics to stderr in a formatted manner
pub fn print_statistics(stats: &BuildStatistics) {
    eprintln!("=== Manifest Statistics ===\n");

    eprintln!("Overview:");
    eprintln!("  Categories found: {}", stats.categories_found);
    eprintln!("  Sections written: {}", stats.sections);
    eprintln!("  Pages: {}", stats.pages);
    eprintln!("  Anchors: {}", stats.anchors);
    eprintln!("  Listing pages using fallback scan: {}", stats.listing_fallbacks);
    eprintln!();

    if !stats.skipped_categories.is_empty() {
        eprintln!("Skipped Categories ({}):", stats.skipped_categories.len());
        for skipped in &stats.skipped_categories {
            eprintln!("  - {} ({})", skipped.url, skipped.reason);
        }
        eprintln!();
    }

    if !stats.dropped_articles.is_empty() {
        eprintln!("Dropped Articles ({}):", stats.dropped_articles.len());
        for dropped in &stats.dropped_articles {
            eprintln!("  - {} ({})", dropped.url, dropped.reason);
        }
        eprintln!();
    }

    if !stats.degraded_pages.is_empty() {
        eprintln!("Degraded Pages ({}):", stats.degraded_pages.len());
        for url in &stats.degraded_pages {
            eprintln!("  - {}", url);
        }
        eprintln!();
    }

    let attempted = stats.pages + stats.dropped_articles.len();
    let complete = stats.pages.saturating_sub(stats.degraded_pages.len());
    let rate = if attempted > 0 {
        (complete as f64 / attempted as f64) * 100.0
    } else {
        0.0
    };

    eprintln!(
        "Completeness: {:.1}% ({} / {} articles fully extracted)",
        rate, complete, attempted
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{Page, Section};

    #[test]
    fn test_record_manifest() {
        let manifest = Manifest::new(
            "https://site/support/",
            vec![Section {
                title: "Design".to_string(),
                url: "https://site/support/category/design/".to_string(),
                pages: vec![
                    Page {
                        title: "A".to_string(),
                        url: "https://site/support/a/".to_string(),
                        anchors: vec![],
                    },
                    Page {
                        title: "B".to_string(),
                        url: "https://site/support/b/".to_string(),
                        anchors: vec![],
                    },
                ],
            }],
        );

        let mut stats = BuildStatistics::default();
        stats.record_manifest(&manifest);
        assert_eq!(stats.sections, 1);
        assert_eq!(stats.pages, 2);
        assert_eq!(stats.anchors, 0);
        assert!(stats.is_clean());
    }

    #[test]
    fn test_not_clean_with_skips() {
        let stats = BuildStatistics {
            skipped_categories: vec![SkippedCategory {
                url: "https://site/support/category/broken/".to_string(),
                reason: "HTTP 500".to_string(),
            }],
            ..BuildStatistics::default()
        };
        assert!(!stats.is_clean());
    }
}
