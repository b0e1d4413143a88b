//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub blurb: Vec<String>,

    /// Social and contact links, in display order
    pub links: IndexMap<String, String>,

    // Content
    pub content_dir: String,
    pub content_extension: String,
    pub words_per_minute: usize,
    pub highlight_theme: String,

    // Sitemap
    pub sitemap: Vec<StaticRoute>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            url: "http://example.com".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            blurb: Vec::new(),
            links: IndexMap::new(),

            content_dir: "content".to_string(),
            content_extension: "mdx".to_string(),
            words_per_minute: 200,
            highlight_theme: "base16-ocean.dark".to_string(),

            sitemap: vec![
                StaticRoute::new("/", 0.8, ChangeFrequency::Weekly),
                StaticRoute::new("/articles", 0.7, ChangeFrequency::Weekly),
                StaticRoute::new("/projects", 0.7, ChangeFrequency::Weekly),
                StaticRoute::new("/links", 0.5, ChangeFrequency::Monthly),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// A top-level route listed in the sitemap regardless of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    pub path: String,
    #[serde(default)]
    pub priority: Option<f32>,
    #[serde(default)]
    pub change_frequency: Option<ChangeFrequency>,
}

impl StaticRoute {
    pub fn new(path: &str, priority: f32, change_frequency: ChangeFrequency) -> Self {
        Self {
            path: path.to_string(),
            priority: Some(priority),
            change_frequency: Some(change_frequency),
        }
    }
}

/// sitemaps.org `<changefreq>` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        };
        f.write_str(s)
    }
}
