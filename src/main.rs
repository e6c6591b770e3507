//! Support-Atlas main entry point
//!
//! This is the command-line interface for the Support-Atlas site mapper.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use support_atlas::config::{load_config_with_hash, validate, Config};
use support_atlas::crawler::crawl;
use support_atlas::output::{generate_markdown_summary, print_statistics, write_manifest};
use tracing_subscriber::EnvFilter;

/// Support-Atlas: a documentation site mapper
///
/// Support-Atlas crawls a documentation site's categories, articles and
/// in-page anchors and writes them as a single JSON manifest for navigation
/// tooling.
#[derive(Parser, Debug)]
#[command(name = "support-atlas")]
#[command(version)]
#[command(about = "Maps a documentation site into a navigation manifest", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the manifest here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also write a markdown table of contents here
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_deref())?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let manifest_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.manifest_path));
    let summary_path = cli
        .summary
        .or_else(|| config.output.summary_path.as_ref().map(PathBuf::from));

    handle_crawl(&config, &manifest_path, summary_path.as_deref(), cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Diagnostics go to stderr; stdout stays free for piping.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("support_atlas=info,warn"),
            1 => EnvFilter::new("support_atlas=debug,info"),
            2 => EnvFilter::new("support_atlas=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given
fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            let config = Config::default();
            validate(&config).context("built-in configuration is invalid")?;
            tracing::info!("No configuration file given, using built-in defaults");
            Ok(config)
        }
    }
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Support-Atlas Dry Run ===\n");

    println!("Site:");
    println!("  Root: {}", config.site.root);
    println!("  Entry page: {}", config.site.guides);
    println!("  Category prefix: {}", config.site.category_prefix);
    println!("  Reserved prefixes: {}", config.site.reserved_prefixes.join(", "));

    println!("\nFetching:");
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Delay between requests: {}ms", config.fetch.delay_ms);
    println!("  Max pages per listing: {}", config.fetch.max_listing_pages);

    println!("\nExtraction:");
    println!("  Main content: {}", config.extract.main_content.join(" | "));
    println!("  Article titles: {}", config.extract.article_title.join(" | "));
    println!("  Next page: {}", config.extract.pagination_next.join(" | "));
    println!("  Boilerplate: {}", config.extract.boilerplate.join(", "));

    println!("\nOutput:");
    println!("  Manifest: {}", config.output.manifest_path);
    if let Some(summary) = &config.output.summary_path {
        println!("  Summary: {}", summary);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(
    config: &Config,
    manifest_path: &Path,
    summary_path: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    tracing::info!("Building manifest from {}", config.site.guides);

    let report = crawl(config).await.context("crawl failed")?;

    write_manifest(&report.manifest, manifest_path)
        .with_context(|| format!("failed to write manifest {}", manifest_path.display()))?;

    if let Some(path) = summary_path {
        generate_markdown_summary(&report.manifest, path)
            .with_context(|| format!("failed to write summary {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    if !quiet {
        print_statistics(&report.stats);
    }

    tracing::info!(
        "Wrote {} with {} pages across {} categories",
        manifest_path.display(),
        report.stats.pages,
        report.stats.sections
    );

    Ok(())
}
