//! Content entry data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::date::{date_sort_key, normalize_date};
use super::reading_time::reading_time;
use super::FrontMatter;

/// Namespace partition of the catalog; each type has its own directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Project,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Article, ContentType::Project];

    /// Directory under the content root, also the URL segment
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Article => "articles",
            Self::Project => "projects",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => f.write_str("article"),
            Self::Project => f.write_str("project"),
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" | "articles" => Ok(Self::Article),
            "project" | "projects" => Ok(Self::Project),
            other => Err(format!(
                "Unknown content type: {}. Available: article, project",
                other
            )),
        }
    }
}

/// One article or project loaded from the content store
#[derive(Debug, Clone, Serialize)]
pub struct ContentEntry {
    /// File name minus extension; unique within its type
    pub identifier: String,
    pub content_type: ContentType,

    /// Raw markup after the front-matter block
    pub body: String,

    pub title: String,
    /// Empty when missing or not a string
    pub description: String,
    /// Normalized date, usually `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub reading_time: String,
    pub word_count: usize,

    /// Custom front-matter fields
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl ContentEntry {
    /// Build an entry from the raw text of its backing file
    pub fn from_source(
        content_type: ContentType,
        identifier: &str,
        source: &str,
        words_per_minute: usize,
    ) -> Self {
        let (fm, body) = FrontMatter::parse(source);
        let stats = reading_time(body, words_per_minute);

        Self {
            identifier: identifier.to_string(),
            content_type,
            body: body.to_string(),
            title: fm.title.unwrap_or_else(|| identifier.to_string()),
            description: fm.description.unwrap_or_default(),
            date: normalize_date(&fm.date),
            tags: fm.tags,
            draft: fm.draft,
            external: fm.external,
            repo: fm.repo,
            image: fm.image,
            reading_time: stats.text,
            word_count: stats.words,
            extra: fm.extra,
        }
    }

    /// Listing order key; undated entries sort as the oldest
    pub fn sort_key(&self) -> i64 {
        date_sort_key(self.date.as_deref())
    }

    /// Site path of this entry, e.g. `/articles/hello-world`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.content_type.dir_name(), self.identifier)
    }
}
