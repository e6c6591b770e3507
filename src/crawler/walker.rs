//! Category hierarchy walker
//!
//! Given a category, decides whether it is a hub (links to other
//! categories) or a plain listing, and gathers its article URLs across
//! subcategories and pagination.

use crate::crawler::fetcher::{FetchError, FetchedPage, PageFetcher};
use crate::extract::{Extractors, ListingTier};
use crate::url::UrlList;
use thiserror::Error;

/// A listing page of the category could not be fetched
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("failed to fetch listing page {url}: {source}")]
    Fetch { url: String, source: FetchError },
}

/// Articles gathered for one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryArticles {
    /// Subcategories walked, empty unless the category is a hub
    pub subcategories: Vec<String>,

    /// Article URLs, subcategory order then listing order, de-duplicated
    pub articles: Vec<String>,

    /// Listing pages that needed the fallback link scan
    pub listing_fallbacks: usize,
}

/// Walks a category's subcategories and paginated listings
pub struct HierarchyWalker<'a, F> {
    fetcher: &'a F,
    extractors: &'a Extractors,
    max_listing_pages: u32,
}

impl<'a, F: PageFetcher> HierarchyWalker<'a, F> {
    pub fn new(fetcher: &'a F, extractors: &'a Extractors, max_listing_pages: u32) -> Self {
        Self {
            fetcher,
            extractors,
            max_listing_pages,
        }
    }

    /// Fetches the category page and walks it
    pub async fn walk_url(&self, category_url: &str) -> Result<CategoryArticles, WalkError> {
        let hub = self.fetch_listing(category_url).await?;
        self.walk(category_url, &hub).await
    }

    /// Walks a category whose page has already been fetched
    ///
    /// 1. Links to other categories are collected from the main-content region
    ///    of `hub` as subcategories.
    /// 2. With subcategories, the category is a pure hub: each subcategory's
    ///    listing is extracted in order and the hub's own articles are ignored.
    /// 3. Without subcategories, the category's own listing is extracted.
    /// 4. Articles are de-duplicated across everything walked.
    ///
    /// Any listing page that cannot be fetched fails the whole walk.
    pub async fn walk(
        &self,
        category_url: &str,
        hub: &FetchedPage,
    ) -> Result<CategoryArticles, WalkError> {
        let subcategories =
            self.extractors
                .subcategory_links(category_url, &hub.final_url, &hub.body);

        let mut articles = UrlList::new();
        let mut listing_fallbacks = 0;

        if subcategories.is_empty() {
            self.collect_listing(category_url, Some(hub), &mut articles, &mut listing_fallbacks)
                .await?;
        } else {
            tracing::info!(
                "    Hub category with {} subcategories: {}",
                subcategories.len(),
                category_url
            );
            for subcategory in &subcategories {
                self.collect_listing(subcategory, None, &mut articles, &mut listing_fallbacks)
                    .await?;
            }
        }

        Ok(CategoryArticles {
            subcategories,
            articles: articles.into_vec(),
            listing_fallbacks,
        })
    }

    /// Follows one listing through its pagination, appending to `articles`
    async fn collect_listing(
        &self,
        start_url: &str,
        mut first_page: Option<&FetchedPage>,
        articles: &mut UrlList,
        listing_fallbacks: &mut usize,
    ) -> Result<(), WalkError> {
        let mut visited = UrlList::new();
        let mut next = Some(start_url.to_string());

        while let Some(url) = next.take() {
            if !visited.push(url.as_str()) {
                tracing::debug!("Pagination loops back to {}, stopping", url);
                break;
            }
            if visited.len() > self.max_listing_pages as usize {
                tracing::warn!(
                    "Listing {} exceeds {} pages, ignoring the rest",
                    start_url,
                    self.max_listing_pages
                );
                break;
            }

            tracing::debug!("    Listing page: {}", url);
            let listing = match first_page.take() {
                Some(page) => self.extractors.listing(&page.final_url, &page.body),
                None => {
                    let page = self.fetch_listing(&url).await?;
                    self.extractors.listing(&page.final_url, &page.body)
                }
            };

            if listing.tier == ListingTier::Fallback {
                *listing_fallbacks += 1;
                tracing::debug!("    No article-title links on {}, used fallback scan", url);
            }

            articles.extend(listing.articles);
            next = listing
                .next_page
                .filter(|next_url| self.extractors.grammar().is_under_root(next_url));
        }

        Ok(())
    }

    async fn fetch_listing(&self, url: &str) -> Result<FetchedPage, WalkError> {
        self.fetcher
            .fetch(url)
            .await
            .map_err(|source| WalkError::Fetch {
                url: url.to_string(),
                source,
            })
    }
}
