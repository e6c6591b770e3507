use crate::extract::{document_title, slug_to_title, visible_text, Extractors};
use crate::output::Anchor;
use scraper::Html;
use std::collections::HashSet;

/// Title and deep-link anchors of one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub anchors: Vec<Anchor>,
}

impl Extractors {
    /// Extracts the anchors and display title of an article
    ///
    /// `html` is `None` when the article could not be fetched: the result then
    /// has no anchors and a slug-derived title.
    ///
    /// Anchors come from `h2`-`h4` headings carrying a non-empty `id`, in
    /// document order, de-duplicated by URL. A heading without visible text is
    /// titled `#<id>`. Headings without an `id` are never surfaced.
    pub fn article(&self, article_url: &str, html: Option<&str>) -> ArticleContent {
        let Some(html) = html else {
            return ArticleContent {
                title: slug_to_title(article_url),
                anchors: Vec::new(),
            };
        };

        let document = Html::parse_document(html);
        let mut seen = HashSet::new();
        let mut anchors = Vec::new();

        for heading in document.select(&self.anchor_headings) {
            let Some(id) = heading.value().attr("id").filter(|id| !id.is_empty()) else {
                continue;
            };

            let url = format!("{}#{}", article_url, id);
            if !seen.insert(url.clone()) {
                continue;
            }

            let text = visible_text(heading);
            let title = if text.is_empty() {
                format!("#{}", id)
            } else {
                text
            };

            anchors.push(Anchor { title, url });
        }

        let title =
            document_title(self, &document).unwrap_or_else(|| slug_to_title(article_url));

        ArticleContent { title, anchors }
    }
}
