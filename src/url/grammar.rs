use crate::config::SiteConfig;

/// What a URL denotes under the site grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKind {
    /// Category or subcategory listing
    Category,
    /// Article page
    Article,
    /// Anything else (home page, assets, reserved sections, other sites)
    Other,
}

/// URL grammar of a single documentation site
///
/// Classification is a hard filter: a URL that fails its pattern is rejected
/// outright, and malformed or cross-site links never enter the manifest.
///
/// - Category: `<root><category-prefix>` followed by one or more slug segments
///   (`[a-z0-9-]+`), optional trailing slash, no query, no fragment.
/// - Article: under `<root>`, path not starting with a reserved prefix, no query,
///   no fragment.
#[derive(Debug, Clone)]
pub struct SiteGrammar {
    root: String,
    category_prefix: String,
    reserved_prefixes: Vec<String>,
}

impl SiteGrammar {
    pub fn new(
        root: impl Into<String>,
        category_prefix: impl Into<String>,
        reserved_prefixes: Vec<String>,
    ) -> Self {
        Self {
            root: root.into(),
            category_prefix: category_prefix.into(),
            reserved_prefixes,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.root.clone(),
            config.category_prefix.clone(),
            config.reserved_prefixes.clone(),
        )
    }

    /// The root prefix every accepted URL lives under
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Classifies a URL string
    ///
    /// # Examples
    ///
    /// ```
    /// use support_atlas::url::{SiteGrammar, UrlKind};
    ///
    /// let grammar = SiteGrammar::new(
    ///     "https://site/support/",
    ///     "category/",
    ///     vec!["category/".to_string(), "tag/".to_string()],
    /// );
    ///
    /// assert_eq!(grammar.classify("https://site/support/category/design/"), UrlKind::Category);
    /// assert_eq!(grammar.classify("https://site/support/themes-overview/"), UrlKind::Article);
    /// assert_eq!(grammar.classify("https://site/support/tag/foo/"), UrlKind::Other);
    /// ```
    pub fn classify(&self, url: &str) -> UrlKind {
        if self.is_category_url(url) {
            UrlKind::Category
        } else if self.is_article_url(url) {
            UrlKind::Article
        } else {
            UrlKind::Other
        }
    }

    /// Returns true if the URL is a (possibly nested) category URL
    pub fn is_category_url(&self, url: &str) -> bool {
        self.category_segments(url).is_some()
    }

    /// Returns true if the URL is an article URL
    pub fn is_article_url(&self, url: &str) -> bool {
        match self.site_path(url) {
            Some(path) => {
                !path.is_empty()
                    && !self
                        .reserved_prefixes
                        .iter()
                        .any(|prefix| path.starts_with(prefix.as_str()))
            }
            None => false,
        }
    }

    /// Returns true if the URL is under the root prefix, whatever its shape
    pub fn is_under_root(&self, url: &str) -> bool {
        url.starts_with(&self.root)
    }

    /// Returns true if `candidate` can be listed as a subcategory of `category`
    ///
    /// Any other category URL qualifies, nested or not. The category itself
    /// and pagination pages of any listing (`category/a/page/2/`) do not.
    pub fn is_subcategory_of(&self, candidate: &str, category: &str) -> bool {
        match self.category_segments(candidate) {
            Some(segments) => {
                !is_pagination_path(&segments) && !self.same_category(candidate, category)
            }
            None => false,
        }
    }

    /// Returns true if two category URLs name the same category
    pub fn same_category(&self, a: &str, b: &str) -> bool {
        match (self.category_segments(a), self.category_segments(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Path after the root, rejecting anything with a query, fragment or whitespace
    fn site_path<'a>(&self, url: &'a str) -> Option<&'a str> {
        let path = url.strip_prefix(self.root.as_str())?;
        if path.contains(['?', '#']) || path.chars().any(char::is_whitespace) {
            return None;
        }
        Some(path)
    }

    /// Slug segments after the category prefix, if the URL is a category URL
    fn category_segments<'a>(&self, url: &'a str) -> Option<Vec<&'a str>> {
        let rest = self
            .site_path(url)?
            .strip_prefix(self.category_prefix.as_str())?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return None;
        }

        let segments: Vec<&str> = rest.split('/').collect();
        segments
            .iter()
            .all(|segment| is_slug(segment))
            .then_some(segments)
    }
}

/// Lowercase letters, digits and hyphens, non-empty
fn is_slug(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Category path ending in a `page/<n>` continuation
fn is_pagination_path(segments: &[&str]) -> bool {
    matches!(segments, [.., "page", n] if n.chars().all(|c| c.is_ascii_digit()))
}
