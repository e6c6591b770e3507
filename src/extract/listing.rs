use crate::extract::{visible_text, Extractors};
use crate::url::{resolve_href, UrlList};
use scraper::{ElementRef, Html};
use url::Url;

/// Which selection strategy produced a listing's articles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTier {
    /// Anchors inside recognized article-title structures
    Structured,
    /// Every article-shaped link in the scoped region, minus boilerplate
    Fallback,
}

/// Articles found on a single listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Article URLs in DOM order of first occurrence
    pub articles: Vec<String>,
    /// Strategy that produced `articles`
    pub tier: ListingTier,
    /// Next page of the same listing, if paginated
    pub next_page: Option<String>,
}

impl Extractors {
    /// Extracts article URLs from a category or subcategory page
    ///
    /// # Selection
    ///
    /// 1. Scope to the main-content region (whole document if none).
    /// 2. Tier 1: anchors matched by the article-title selectors.
    /// 3. Tier 2, only when tier 1 found nothing: every anchor in scope whose
    ///    text is not boilerplate.
    ///
    /// In both tiers an href is kept only if, fragment stripped, it is an
    /// article URL not seen earlier on this page.
    ///
    /// # Example
    ///
    /// ```
    /// use support_atlas::config::Config;
    /// use support_atlas::extract::{Extractors, ListingTier};
    /// use support_atlas::url::SiteGrammar;
    /// use url::Url;
    ///
    /// let config = Config::default();
    /// let extractors =
    ///     Extractors::new(SiteGrammar::from_config(&config.site), &config.extract).unwrap();
    /// let page = Url::parse("https://wordpress.com/support/category/design/").unwrap();
    /// let html = r#"<main><h2 class="entry-title">
    ///     <a href="https://wordpress.com/support/themes/">Themes</a></h2></main>"#;
    ///
    /// let listing = extractors.listing(&page, html);
    /// assert_eq!(listing.articles, vec!["https://wordpress.com/support/themes/"]);
    /// assert_eq!(listing.tier, ListingTier::Structured);
    /// ```
    pub fn listing(&self, page_url: &Url, html: &str) -> Listing {
        let document = Html::parse_document(html);
        let scope = self.main_content(&document);

        let structured = self.collect_articles(page_url, scope.select(&self.article_title), false);
        let (articles, tier) = if structured.is_empty() {
            let fallback = self.collect_articles(page_url, scope.select(&self.links), true);
            (fallback, ListingTier::Fallback)
        } else {
            (structured, ListingTier::Structured)
        };

        Listing {
            articles: articles.into_vec(),
            tier,
            next_page: self.next_page(page_url, &document),
        }
    }

    /// Category URLs linked from the main-content region, in discovery order
    pub fn category_links(&self, page_url: &Url, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let scope = self.main_content(&document);

        scope
            .select(&self.links)
            .filter_map(|link| self.link_target(page_url, link))
            .filter(|url| self.grammar.is_category_url(url))
            .collect::<UrlList>()
            .into_vec()
    }

    /// Subcategories linked from a hub category page, in discovery order
    ///
    /// Candidates are category URLs other than `hub_url` itself, excluding
    /// pagination pages and links with boilerplate text.
    pub fn subcategory_links(&self, hub_url: &str, page_url: &Url, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let scope = self.main_content(&document);

        scope
            .select(&self.links)
            .filter(|link| !self.is_boilerplate(&visible_text(*link)))
            .filter_map(|link| self.link_target(page_url, link))
            .filter(|url| self.grammar.is_subcategory_of(url, hub_url))
            .collect::<UrlList>()
            .into_vec()
    }

    fn collect_articles<'a>(
        &self,
        page_url: &Url,
        links: impl Iterator<Item = ElementRef<'a>>,
        skip_boilerplate: bool,
    ) -> UrlList {
        let mut articles = UrlList::new();
        for link in links {
            if skip_boilerplate && self.is_boilerplate(&visible_text(link)) {
                continue;
            }
            if let Some(url) = self.link_target(page_url, link) {
                if self.grammar.is_article_url(&url) {
                    articles.push(url);
                }
            }
        }
        articles
    }

    /// First pagination link, selectors tried in priority order
    fn next_page(&self, page_url: &Url, document: &Html) -> Option<String> {
        self.pagination_next.iter().find_map(|selector| {
            document
                .select(selector)
                .find_map(|link| self.link_target(page_url, link))
        })
    }

    fn link_target(&self, page_url: &Url, link: ElementRef<'_>) -> Option<String> {
        link.value()
            .attr("href")
            .and_then(|href| resolve_href(page_url, href))
    }
}
