use crate::config::types::{Config, ExtractConfig, FetchConfig, OutputConfig, SiteConfig};
use crate::extract::compile_selector;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    validate_extract_config(&config.extract)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the site URL grammar
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_http_url("root", &config.root)?;
    validate_http_url("guides", &config.guides)?;

    if !config.root.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "root must end with '/', got '{}'",
            config.root
        )));
    }

    if config.category_prefix.is_empty() || !config.category_prefix.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "category-prefix must be non-empty and end with '/', got '{}'",
            config.category_prefix
        )));
    }

    if config.reserved_prefixes.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Validation(
            "reserved-prefixes cannot contain an empty prefix".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.max_listing_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-listing-pages must be >= 1, got {}",
            config.max_listing_pages
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every configured selector compiles
fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    if config.article_title.is_empty() {
        return Err(ConfigError::Validation(
            "article-title needs at least one selector".to_string(),
        ));
    }

    for selector in config
        .main_content
        .iter()
        .chain(&config.article_title)
        .chain(&config.pagination_next)
    {
        compile_selector(selector)?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.manifest_path.is_empty() {
        return Err(ConfigError::Validation(
            "manifest-path cannot be empty".to_string(),
        ));
    }

    if matches!(&config.summary_path, Some(p) if p.is_empty()) {
        return Err(ConfigError::Validation(
            "summary-path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a configured URL is absolute http(s)
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_root_must_end_with_slash() {
        let mut config = Config::default();
        config.site.root = "https://wordpress.com/support".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("root", "https://example.com/docs/").is_ok());
        assert!(validate_http_url("root", "http://127.0.0.1:8080/").is_ok());

        assert!(validate_http_url("root", "not a url").is_err());
        assert!(validate_http_url("root", "ftp://example.com/").is_err());
        assert!(validate_http_url("root", "/relative/").is_err());
    }

    #[test]
    fn test_category_prefix_rules() {
        let mut config = Config::default();
        config.site.category_prefix = "category".to_string();
        assert!(validate(&config).is_err());

        config.site.category_prefix = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut config = Config::default();
        config.extract.article_title = vec![".card a[href][rel!=category]".to_string()];
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_empty_summary_path_rejected() {
        let mut config = Config::default();
        config.output.summary_path = Some(String::new());
        assert!(validate(&config).is_err());
    }
}
