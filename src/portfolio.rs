//! Portfolio manifest loading.
//!
//! The gallery contents live in a small TOML manifest: a `[portfolio]` header
//! plus one `[[items]]` entry per displayable card. Keeping the loader
//! isolated makes it easy to re-read the manifest on refresh without touching
//! the rest of the app.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Header block shown in the hero section above the gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioHeader {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
}

impl Default for PortfolioHeader {
    fn default() -> Self {
        PortfolioHeader {
            title: default_title(),
            tagline: String::new(),
        }
    }
}

/// One displayable gallery card.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Optional explicit one-based page assignment. Presence on the first
    /// item switches the whole collection into explicit mode.
    #[serde(default)]
    pub page: Option<u32>,
    /// Display flag derived from the current page; never read from disk.
    #[serde(skip)]
    pub visible: bool,
}

/// Whole manifest: header plus the ordered item list.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Portfolio {
    #[serde(default)]
    pub portfolio: PortfolioHeader,
    #[serde(default)]
    pub items: Vec<PortfolioItem>,
}

/// Load and parse a manifest from disk.
pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at {}", path.display()))?;
    let portfolio: Portfolio = toml::from_str(&contents)
        .with_context(|| format!("Invalid manifest TOML at {}", path.display()))?;
    debug!(
        marked = portfolio
            .items
            .iter()
            .filter(|item| item.page.is_some())
            .count(),
        "Parsed manifest items"
    );
    info!(
        path = %path.display(),
        items = portfolio.items.len(),
        "Loaded portfolio manifest"
    );
    Ok(portfolio)
}

fn default_title() -> String {
    "Portfolio".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_items() {
        let manifest = r#"
            [portfolio]
            title = "My Work"
            tagline = "Selected projects"

            [[items]]
            title = "First"
            description = "A thing"
            category = "web"

            [[items]]
            title = "Second"
            page = 2
        "#;
        let portfolio: Portfolio = toml::from_str(manifest).expect("manifest parses");
        assert_eq!(portfolio.portfolio.title, "My Work");
        assert_eq!(portfolio.items.len(), 2);
        assert_eq!(portfolio.items[0].page, None);
        assert_eq!(portfolio.items[0].category.as_deref(), Some("web"));
        assert_eq!(portfolio.items[1].page, Some(2));
        assert!(!portfolio.items[0].visible);
    }

    #[test]
    fn empty_manifest_yields_defaults() {
        let portfolio: Portfolio = toml::from_str("").expect("empty manifest parses");
        assert_eq!(portfolio.portfolio.title, "Portfolio");
        assert!(portfolio.items.is_empty());
    }

    #[test]
    fn missing_file_reports_path_in_error() {
        let err = load_portfolio(Path::new("/nonexistent/portfolio.toml"))
            .expect_err("missing file fails");
        assert!(format!("{err:#}").contains("/nonexistent/portfolio.toml"));
    }
}
