//! Manifest builder - main crawl orchestration logic
//!
//! This module drives the whole run:
//! - Discovering categories on the entry page (run-fatal on failure)
//! - Building one section per category (category failures skip the category)
//! - Building one page per article (fetch failures degrade, other failures drop)
//! - Assembling the manifest in discovery order
//!
//! Traversal is sequential; the fetcher inserts the politeness delay after
//! every request.

use crate::config::Config;
use crate::crawler::fetcher::{FetchError, PageFetcher};
use crate::crawler::walker::{HierarchyWalker, WalkError};
use crate::extract::Extractors;
use crate::output::{BuildStatistics, DroppedArticle, Manifest, Page, Section, SkippedCategory};
use crate::url::SiteGrammar;
use crate::{AtlasError, ConfigError};
use thiserror::Error;

/// A category could not be mapped; it is left out of the manifest
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("failed to fetch category page: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Walk(#[from] WalkError),
}

/// An article could not be mapped; it is left out of its section
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("article is binary content ({content_type})")]
    Binary { content_type: String },

    #[error("article redirected off-site to {final_url}")]
    OffSite { final_url: String },
}

/// Result of mapping one article
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageOutcome {
    /// Fetched and extracted
    Complete(Page),
    /// Fetch failed; slug title, no anchors
    Degraded(Page, FetchError),
}

/// A finished run: the manifest plus what happened along the way
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub manifest: Manifest,
    pub stats: BuildStatistics,
}

/// Main manifest builder structure
pub struct ManifestBuilder<F> {
    fetcher: F,
    extractors: Extractors,
    guides_url: String,
    max_listing_pages: u32,
}

impl<F: PageFetcher> ManifestBuilder<F> {
    /// Creates a builder from already compiled extractors
    pub fn new(
        fetcher: F,
        extractors: Extractors,
        guides_url: impl Into<String>,
        max_listing_pages: u32,
    ) -> Self {
        Self {
            fetcher,
            extractors,
            guides_url: guides_url.into(),
            max_listing_pages,
        }
    }

    /// Creates a builder for the site described by `config`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use support_atlas::config::Config;
    /// use support_atlas::crawler::{HttpFetcher, ManifestBuilder};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::default();
    /// let fetcher = HttpFetcher::new(&config.fetch)?;
    /// let report = ManifestBuilder::from_config(fetcher, &config)?.build().await?;
    /// println!("{} sections", report.manifest.sections.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(fetcher: F, config: &Config) -> Result<Self, ConfigError> {
        let grammar = SiteGrammar::from_config(&config.site);
        let extractors = Extractors::new(grammar, &config.extract)?;
        Ok(Self::new(
            fetcher,
            extractors,
            config.site.guides.clone(),
            config.fetch.max_listing_pages,
        ))
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Builds the complete manifest
    ///
    /// Only entry-page failures are returned as errors. Every category and
    /// article failure is logged, recorded in the statistics, and isolated to
    /// the unit it affects.
    pub async fn build(&self) -> Result<BuildReport, AtlasError> {
        let categories = self.discover_categories().await?;

        let mut stats = BuildStatistics {
            categories_found: categories.len(),
            ..BuildStatistics::default()
        };
        let mut sections = Vec::with_capacity(categories.len());

        for category_url in &categories {
            tracing::info!("Category: {}", category_url);
            match self.build_section(category_url, &mut stats).await {
                Ok(section) => {
                    tracing::info!(
                        "    Articles mapped: {} ({})",
                        section.pages.len(),
                        section.title
                    );
                    sections.push(section);
                }
                Err(e) => {
                    tracing::warn!("Skipping category {}: {}", category_url, e);
                    stats.skipped_categories.push(SkippedCategory {
                        url: category_url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let manifest = Manifest::new(self.extractors.grammar().root(), sections);
        stats.record_manifest(&manifest);

        tracing::info!(
            "Mapped {} pages across {} categories",
            stats.pages,
            stats.sections
        );

        Ok(BuildReport { manifest, stats })
    }

    /// Category URLs linked from the entry page, in discovery order
    pub async fn discover_categories(&self) -> Result<Vec<String>, AtlasError> {
        tracing::info!("Fetching entry page {}", self.guides_url);
        let page = self
            .fetcher
            .fetch(&self.guides_url)
            .await
            .map_err(|source| AtlasError::EntryPage {
                url: self.guides_url.clone(),
                source,
            })?;

        let categories = self.extractors.category_links(&page.final_url, &page.body);
        if categories.is_empty() {
            return Err(AtlasError::NoCategories {
                url: self.guides_url.clone(),
            });
        }

        tracing::info!("Found {} categories", categories.len());
        Ok(categories)
    }

    /// Builds the section for one category
    async fn build_section(
        &self,
        category_url: &str,
        stats: &mut BuildStatistics,
    ) -> Result<Section, CategoryError> {
        let hub = self.fetcher.fetch(category_url).await?;

        let title = self.extractors.page_title(category_url, &hub.body);

        let walker = HierarchyWalker::new(&self.fetcher, &self.extractors, self.max_listing_pages);
        let walked = walker.walk(category_url, &hub).await?;
        stats.listing_fallbacks += walked.listing_fallbacks;
        tracing::info!("    Articles found: {}", walked.articles.len());

        let mut pages = Vec::with_capacity(walked.articles.len());
        for article_url in walked.articles {
            match self.build_page(&article_url).await {
                Ok(PageOutcome::Complete(page)) => pages.push(page),
                Ok(PageOutcome::Degraded(page, error)) => {
                    tracing::warn!(
                        "    Error fetching article {} ({}), keeping it without anchors",
                        article_url,
                        error
                    );
                    stats.degraded_pages.push(article_url);
                    pages.push(page);
                }
                Err(e) => {
                    tracing::warn!("    Skipping article {}: {}", article_url, e);
                    stats.dropped_articles.push(DroppedArticle {
                        category: category_url.to_string(),
                        url: article_url,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(Section {
            title,
            url: category_url.to_string(),
            pages,
        })
    }

    /// Builds the page for one article
    async fn build_page(&self, article_url: &str) -> Result<PageOutcome, ArticleError> {
        let fetched = match self.fetcher.fetch(article_url).await {
            Ok(page) => page,
            Err(error) => {
                let content = self.extractors.article(article_url, None);
                return Ok(PageOutcome::Degraded(
                    Page {
                        title: content.title,
                        url: article_url.to_string(),
                        anchors: content.anchors,
                    },
                    error,
                ));
            }
        };

        if fetched.is_binary() {
            return Err(ArticleError::Binary {
                content_type: fetched.content_type_label(),
            });
        }

        if !self
            .extractors
            .grammar()
            .is_under_root(fetched.final_url.as_str())
        {
            return Err(ArticleError::OffSite {
                final_url: fetched.final_url.to_string(),
            });
        }

        let content = self.extractors.article(article_url, Some(&fetched.body));
        Ok(PageOutcome::Complete(Page {
            title: content.title,
            url: article_url.to_string(),
            anchors: content.anchors,
        }))
    }
}
