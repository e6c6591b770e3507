use url::Url;

/// Schemes that never lead to a crawlable page
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Resolves an href found on `base` to an absolute URL without fragment
///
/// The query string is kept untouched so the grammar can reject it; only the
/// fragment is stripped, because `page#section` and `page` are the same page.
///
/// Returns None if the link should be ignored:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel: and data: links
/// - hrefs that do not resolve to an http(s) URL
///
/// # Examples
///
/// ```
/// use support_atlas::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://site/support/category/design/").unwrap();
/// assert_eq!(
///     resolve_href(&base, "/support/themes/#install").as_deref(),
///     Some("https://site/support/themes/")
/// );
/// assert_eq!(resolve_href(&base, "mailto:help@site"), None);
/// ```
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return None;
    }

    let mut absolute = base.join(href).ok()?;
    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }

    absolute.set_fragment(None);
    Some(absolute.into())
}
