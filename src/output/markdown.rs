//! Markdown table of contents
//!
//! Renders a manifest as a human-readable outline: one heading per section,
//! one bullet per page, nested bullets per anchor.

use crate::output::{Manifest, OutputResult};
use std::fs;
use std::path::Path;

/// Writes the markdown table of contents for a manifest
pub fn generate_markdown_summary(manifest: &Manifest, output_path: &Path) -> OutputResult<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, format_markdown_summary(manifest))?;
    Ok(())
}

/// Formats a manifest as a markdown outline
pub fn format_markdown_summary(manifest: &Manifest) -> String {
    let mut md = String::new();

    md.push_str("# Support Site Map\n\n");
    md.push_str(&format!("- **Source**: {}\n", manifest.source));
    md.push_str(&format!("- **Version**: {}\n", manifest.version));
    md.push_str(&format!(
        "- **Totals**: {} sections, {} pages, {} anchors\n\n",
        manifest.sections.len(),
        manifest.page_count(),
        manifest.anchor_count()
    ));

    for section in &manifest.sections {
        md.push_str(&format!(
            "## [{}]({})\n\n",
            escape_link_text(&section.title),
            section.url
        ));

        if section.pages.is_empty() {
            md.push_str("_No articles._\n\n");
            continue;
        }

        for page in &section.pages {
            md.push_str(&format!(
                "- [{}]({})\n",
                escape_link_text(&page.title),
                page.url
            ));
            for anchor in &page.anchors {
                md.push_str(&format!(
                    "  - [{}]({})\n",
                    escape_link_text(&anchor.title),
                    anchor.url
                ));
            }
        }
        md.push('\n');
    }

    md
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
