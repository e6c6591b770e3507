use crate::extract::{visible_text, Extractors};
use scraper::Html;

/// Derives a display title from the last path segment of a URL
///
/// Hyphens become spaces. In each word the first character is uppercased
/// and the rest lowercased, so `2fa-setup` gives `2fa Setup`.
///
/// # Examples
///
/// ```
/// use support_atlas::extract::slug_to_title;
///
/// assert_eq!(slug_to_title("https://site/support/install-a-plugin/"), "Install A Plugin");
/// assert_eq!(slug_to_title("https://site/support/category/design"), "Design");
/// ```
pub fn slug_to_title(url: &str) -> String {
    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");

    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First non-empty text among the first `h1`, the first `h2` and `title`
pub fn document_title(extractors: &Extractors, document: &Html) -> Option<String> {
    extractors
        .title_candidates
        .iter()
        .filter_map(|selector| document.select(selector).next())
        .map(visible_text)
        .find(|text| !text.is_empty())
}

impl Extractors {
    /// Display title of a fetched page, falling back to the URL slug
    pub fn page_title(&self, url: &str, html: &str) -> String {
        let document = Html::parse_document(html);
        document_title(self, &document).unwrap_or_else(|| slug_to_title(url))
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
