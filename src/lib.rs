//! folio: content catalog and presentation math for a markdown portfolio site
//!
//! Articles and projects live as front-matter + markdown files under a
//! content directory. This crate loads and lists them, renders their bodies,
//! builds the sitemap, and computes the blur/wave parameters the site's
//! decorative effects are drawn from.

pub mod commands;
pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod helpers;
pub mod server;
pub mod sitemap;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::CatalogError;

/// A site: a base directory and its configuration
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root; one subdirectory per content type
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Query surface over this site's content
    pub fn catalog(&self) -> content::Catalog<'_> {
        content::Catalog::new(self)
    }

    /// Markdown renderer configured for this site
    pub fn renderer(&self) -> content::MarkdownRenderer {
        content::MarkdownRenderer::with_theme(&self.config.highlight_theme)
    }
}
