//! Integration tests for Support-Atlas
//!
//! These tests use wiremock to serve a small documentation site and run the
//! real HTTP fetcher against it end-to-end.

mod crawl_tests;
