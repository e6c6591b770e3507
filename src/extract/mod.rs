//! HTML extraction for Support-Atlas
//!
//! This module turns fetched HTML into the pieces the manifest is made of:
//! - Article anchors and titles (headings carrying an `id`)
//! - Article links on listing pages, with tiered selection
//! - Category and subcategory links
//! - The "next page" link of a paginated listing
//!
//! All selectors are compiled once from configuration into an [`Extractors`]
//! value. Link scanning is scoped to the main-content region when a landmark
//! is present so site-wide navigation and footers are ignored.

mod anchors;
mod listing;
mod title;

pub use anchors::ArticleContent;
pub use listing::{Listing, ListingTier};
pub use title::{document_title, slug_to_title};

use crate::config::ExtractConfig;
use crate::url::SiteGrammar;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector, mapping failures to a configuration error
pub fn compile_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Compiled selectors and text rules shared by every extraction
#[derive(Debug, Clone)]
pub struct Extractors {
    grammar: SiteGrammar,
    main_content: Option<Selector>,
    article_title: Selector,
    pagination_next: Vec<Selector>,
    boilerplate: Vec<String>,
    anchor_headings: Selector,
    title_candidates: Vec<Selector>,
    links: Selector,
}

impl Extractors {
    /// Builds the extractors for a site grammar from configuration
    ///
    /// # Example
    ///
    /// ```
    /// use support_atlas::config::Config;
    /// use support_atlas::extract::Extractors;
    /// use support_atlas::url::SiteGrammar;
    ///
    /// let config = Config::default();
    /// let grammar = SiteGrammar::from_config(&config.site);
    /// let extractors = Extractors::new(grammar, &config.extract).unwrap();
    /// assert_eq!(extractors.grammar().root(), "https://wordpress.com/support/");
    /// ```
    pub fn new(grammar: SiteGrammar, config: &ExtractConfig) -> Result<Self, ConfigError> {
        let main_content = if config.main_content.is_empty() {
            None
        } else {
            Some(compile_selector(&config.main_content.join(", "))?)
        };

        let pagination_next = config
            .pagination_next
            .iter()
            .map(|s| compile_selector(s))
            .collect::<Result<Vec<_>, _>>()?;

        let title_candidates = ["h1", "h2", "title"]
            .iter()
            .map(|s| compile_selector(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            grammar,
            main_content,
            article_title: compile_selector(&config.article_title.join(", "))?,
            pagination_next,
            boilerplate: config
                .boilerplate
                .iter()
                .map(|phrase| normalize_phrase(phrase))
                .collect(),
            anchor_headings: compile_selector("h2[id], h3[id], h4[id]")?,
            title_candidates,
            links: compile_selector("a[href]")?,
        })
    }

    pub fn grammar(&self) -> &SiteGrammar {
        &self.grammar
    }

    /// Main-content region of a document, or the whole document if no landmark matches
    fn main_content<'a>(&self, document: &'a Html) -> ElementRef<'a> {
        self.main_content
            .as_ref()
            .and_then(|selector| document.select(selector).next())
            .unwrap_or_else(|| document.root_element())
    }

    /// Returns true if a link's visible text is known navigation chrome
    fn is_boilerplate(&self, link_text: &str) -> bool {
        let text = normalize_phrase(link_text);
        self.boilerplate.iter().any(|phrase| *phrase == text)
    }
}

/// Visible text of an element, whitespace-collapsed and trimmed
pub(crate) fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
