use std::collections::HashSet;

/// Insertion-ordered, de-duplicating list of URLs
///
/// Each extraction call owns its own list; nothing is shared across pages,
/// categories or runs. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct UrlList {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl UrlList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` unless it is already present; returns whether it was added
    pub fn push(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.urls.push(url);
        true
    }

    /// Appends every URL of `other` in order, skipping duplicates
    pub fn extend<I, S>(&mut self, other: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in other {
            self.push(url);
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

impl<S: Into<String>> FromIterator<S> for UrlList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
