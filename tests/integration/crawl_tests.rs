use std::time::Duration;
use support_atlas::config::{Config, FetchConfig, SiteConfig};
use support_atlas::crawler::{crawl, HttpFetcher, ManifestBuilder, PageFetcher};
use support_atlas::output::{read_manifest, write_manifest};
use support_atlas::AtlasError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the mock server
fn create_test_config(base_url: &str) -> Config {
    Config {
        site: SiteConfig {
            root: format!("{}/support/", base_url),
            guides: format!("{}/support/guides/", base_url),
            ..SiteConfig::default()
        },
        fetch: FetchConfig {
            user_agent: "TestAtlas/1.0".to_string(),
            timeout_secs: 1,
            delay_ms: 5,
            max_listing_pages: 10,
        },
        ..Config::default()
    }
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=UTF-8")
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_with_failed_category() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/support/guides/",
        format!(
            r#"<html><body>
            <header><a href="{base}/support/category/header-only/">Header</a></header>
            <main>
              <a href="{base}/support/category/alpha/">Alpha</a>
              <a href="{base}/support/category/beta/">Beta</a>
            </main>
            </body></html>"#
        ),
    )
    .await;

    mount_html(
        &server,
        "/support/category/alpha/",
        format!(
            r#"<html><body><h1>Alpha Guides</h1><main>
              <article><h2 class="entry-title"><a href="{base}/support/first-steps/">First steps</a></h2></article>
            </main></body></html>"#
        ),
    )
    .await;

    mount_html(
        &server,
        "/support/first-steps/",
        r#"<html><head><title>First steps | Support</title></head><body>
            <h1>First steps</h1>
            <h2 id="create-account">Create an account</h2>
            <h3>Untagged heading</h3>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/support/category/beta/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = create_test_config(&base);
    let report = crawl(&config).await.expect("crawl should not be fatal");
    let manifest = report.manifest;

    assert_eq!(manifest.source, format!("{}/support/", base));
    assert_eq!(manifest.sections.len(), 1);

    let section = &manifest.sections[0];
    assert_eq!(section.title, "Alpha Guides");
    assert_eq!(section.url, format!("{}/support/category/alpha/", base));
    assert_eq!(section.pages.len(), 1);

    let page = &section.pages[0];
    assert_eq!(page.title, "First steps");
    assert_eq!(page.anchors.len(), 1);
    assert_eq!(page.anchors[0].title, "Create an account");
    assert_eq!(
        page.anchors[0].url,
        format!("{}/support/first-steps/#create-account", base)
    );

    assert_eq!(report.stats.skipped_categories.len(), 1);
    assert_eq!(
        report.stats.skipped_categories[0].url,
        format!("{}/support/category/beta/", base)
    );

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("support-links.json");
    write_manifest(&manifest, &out).unwrap();
    let written = read_manifest(&out).unwrap();
    assert_eq!(written.sections, manifest.sections);
}

#[tokio::test]
async fn test_entry_page_failure_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/support/guides/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = create_test_config(&server.uri());
    let result = crawl(&config).await;
    assert!(matches!(result, Err(AtlasError::EntryPage { .. })));
}

#[tokio::test]
async fn test_hub_with_paginated_subcategory() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/support/guides/",
        r#"<main><a href="/support/category/design/">Design</a></main>"#.to_string(),
    )
    .await;

    mount_html(
        &server,
        "/support/category/design/",
        r#"<html><body><h1>Design</h1><main>
            <a href="/support/category/design/themes/">Themes</a>
            <a href="/support/category/design/fonts/">Fonts</a>
            <a href="/support/category/design/page/2/">Older</a>
        </main></body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        &server,
        "/support/category/design/themes/",
        r#"<html><body><main>
            <h2 class="entry-title"><a href="/support/pick-a-theme/">Pick</a></h2>
        </main><a rel="next" href="/support/category/design/themes/page/2/">Older</a></body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        &server,
        "/support/category/design/themes/page/2/",
        r#"<html><body><main>
            <h2 class="entry-title"><a href="/support/switch-themes/">Switch</a></h2>
        </main></body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        &server,
        "/support/category/design/fonts/",
        r#"<html><body><main>
            <p><a href="/support/custom-fonts/">Custom fonts</a></p>
            <p><a href="/support/contact/">Contact us</a></p>
            <p><a href="/support/pick-a-theme/">Pick a theme</a></p>
        </main></body></html>"#
            .to_string(),
    )
    .await;

    for slug in ["pick-a-theme", "switch-themes", "custom-fonts"] {
        mount_html(
            &server,
            &format!("/support/{}/", slug),
            format!(r#"<h1>{slug}</h1><h2 id="overview">Overview</h2>"#),
        )
        .await;
    }

    let config = create_test_config(&base);
    let report = crawl(&config).await.unwrap();

    assert_eq!(report.manifest.sections.len(), 1);
    let urls: Vec<String> = report.manifest.sections[0]
        .pages
        .iter()
        .map(|p| p.url.clone())
        .collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/support/pick-a-theme/", base),
            format!("{}/support/switch-themes/", base),
            format!("{}/support/custom-fonts/", base),
        ]
    );
    assert_eq!(report.stats.listing_fallbacks, 1);
    assert!(report.stats.is_clean());
}

#[tokio::test]
async fn test_article_timeout_degrades() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/support/guides/",
        format!(r#"<main><a href="{base}/support/category/slow/">Slow</a></main>"#),
    )
    .await;

    mount_html(
        &server,
        "/support/category/slow/",
        format!(
            r#"<main><h2 class="entry-title"><a href="{base}/support/very-slow-article/">Slow</a></h2></main>"#
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/support/very-slow-article/"))
        .respond_with(html("<h1>Too late</h1>".to_string()).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = create_test_config(&base);
    let report = crawl(&config).await.unwrap();

    let page = &report.manifest.sections[0].pages[0];
    assert_eq!(page.title, "Very Slow Article");
    assert!(page.anchors.is_empty());
    assert_eq!(report.stats.degraded_pages.len(), 1);
}

#[tokio::test]
async fn test_runs_over_identical_content_match() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/support/guides/",
        format!(r#"<main><a href="{base}/support/category/one/">One</a></main>"#),
    )
    .await;
    mount_html(
        &server,
        "/support/category/one/",
        format!(r#"<h1>One</h1><main><a href="{base}/support/only/">Only</a></main>"#),
    )
    .await;
    mount_html(
        &server,
        "/support/only/",
        r#"<h1>Only</h1><h2 id="a">A</h2><h2 id="a">A again</h2>"#.to_string(),
    )
    .await;

    let config = create_test_config(&base);
    let first = crawl(&config).await.unwrap();
    let second = crawl(&config).await.unwrap();

    assert_eq!(first.manifest.sections, second.manifest.sections);
    assert_eq!(first.manifest.sections[0].pages[0].anchors.len(), 1);
}

#[tokio::test]
async fn test_http_fetcher_classifies_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(html("<p>ok</p>".to_string()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = create_test_config(&server.uri());
    let fetcher = HttpFetcher::new(&config.fetch).unwrap();

    let page = fetcher
        .fetch(&format!("{}/ok", server.uri()))
        .await
        .unwrap();
    assert!(!page.is_binary());
    assert_eq!(page.content_type.as_deref(), Some("text/html; charset=UTF-8"));
    assert_eq!(page.body, "<p>ok</p>");

    let err = fetcher
        .fetch(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, support_atlas::crawler::FetchError::HttpStatus(404));

    let builder = ManifestBuilder::from_config(fetcher, &config).unwrap();
    assert!(builder.fetcher().fetch("http://127.0.0.1:1/").await.is_err());
}
