//! Page fetcher boundary and its HTTP implementation
//!
//! The crawl core only ever sees [`PageFetcher`]: give it a URL, get back the
//! page or a [`FetchError`]. The core never retries; every error is handled by
//! the caller's fallback rules.
//!
//! [`HttpFetcher`] owns the transport concerns:
//! - Building the HTTP client with the configured user agent and timeout
//! - Classifying failures (network, timeout, HTTP status)
//! - The politeness delay inserted after every request

use crate::config::FetchConfig;
use reqwest::{header, redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    HttpStatus(u16),
}

/// Content types whose bodies are never parsed
const BINARY_TYPE_PREFIXES: &[&str] = &[
    "application/pdf",
    "application/zip",
    "application/octet-stream",
    "image/",
    "audio/",
    "video/",
];

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects, used to resolve relative links
    pub final_url: Url,

    /// Content-Type header value, if any
    pub content_type: Option<String>,

    /// Page body
    pub body: String,
}

impl FetchedPage {
    /// Returns true if the server declared a type that can never hold a page
    ///
    /// Only binary media (PDF, images, audio, video, archives) counts. Text
    /// types and a missing header are parsed as HTML whatever they claim.
    pub fn is_binary(&self) -> bool {
        let Some(content_type) = &self.content_type else {
            return false;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        BINARY_TYPE_PREFIXES
            .iter()
            .any(|prefix| mime.starts_with(prefix))
    }

    /// Declared content type, for error messages
    pub fn content_type_label(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Supplies raw HTML for a URL
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use support_atlas::config::FetchConfig;
/// use support_atlas::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("text/html,application/xhtml+xml"),
    );

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(config.timeout())
        .connect_timeout(config.timeout().min(Duration::from_secs(10)))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] over HTTP with a fixed inter-request delay
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    delay: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            delay: config.delay(),
        })
    }

    /// Performs a single GET without the politeness delay
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | `Ok(FetchedPage)` |
    /// | other status | `HttpStatus(code)` |
    /// | timeout (connect, headers or body) | `Timeout` |
    /// | anything else | `Network(description)` |
    async fn fetch_once(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body = response.text().await.map_err(classify_error)?;

        Ok(FetchedPage {
            final_url,
            content_type,
            body,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        tracing::debug!("GET {}", url);
        let result = self.fetch_once(url).await;

        if let Err(e) = &result {
            tracing::debug!("Fetch failed for {}: {}", url, e);
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        result
    }
}

fn classify_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = error.status() {
        FetchError::HttpStatus(status.as_u16())
    } else {
        FetchError::Network(error.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&FetchConfig::default()).is_ok());
    }

    #[test]
    fn test_binary_content_types() {
        let mut page = FetchedPage {
            final_url: Url::parse("https://site/support/").unwrap(),
            content_type: Some("text/html; charset=UTF-8".to_string()),
            body: String::new(),
        };
        assert!(!page.is_binary());

        page.content_type = Some("text/plain".to_string());
        assert!(!page.is_binary());

        page.content_type = None;
        assert!(!page.is_binary());
        assert_eq!(page.content_type_label(), "unknown");

        page.content_type = Some("Application/PDF".to_string());
        assert!(page.is_binary());

        page.content_type = Some("image/png; charset=binary".to_string());
        assert!(page.is_binary());
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::HttpStatus(503).to_string(), "HTTP 503");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
