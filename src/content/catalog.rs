//! Content catalog - enumerates and loads entries from the content store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentEntry, ContentType};
use crate::error::{CatalogError, Result};
use crate::Site;

/// Read-only query surface over the content store.
///
/// Nothing is cached: every query re-reads the backing files.
pub struct Catalog<'a> {
    site: &'a Site,
}

impl<'a> Catalog<'a> {
    /// Create a catalog over a site's content directory
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Directory backing a content type
    pub fn type_dir(&self, content_type: ContentType) -> PathBuf {
        self.site.content_dir.join(content_type.dir_name())
    }

    fn extension(&self) -> &str {
        self.site.config.content_extension.trim_start_matches('.')
    }

    /// Identifiers of every content file for a type, sorted.
    ///
    /// A missing or unreadable directory yields an empty list.
    pub fn list_identifiers(&self, content_type: ContentType) -> Vec<String> {
        let dir = self.type_dir(content_type);
        if !dir.is_dir() {
            tracing::debug!("No {} directory at {:?}", content_type, dir);
            return Vec::new();
        }

        let mut identifiers = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read {:?}: {}", dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && has_extension(path, self.extension()) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    identifiers.push(stem.to_string());
                }
            }
        }

        identifiers.sort();
        identifiers
    }

    /// Load a single entry by identifier
    pub fn load_entry(&self, content_type: ContentType, identifier: &str) -> Result<ContentEntry> {
        if !is_valid_identifier(identifier) {
            return Err(CatalogError::not_found(content_type, identifier));
        }

        let path = self
            .type_dir(content_type)
            .join(format!("{}.{}", identifier, self.extension()));

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::not_found(content_type, identifier),
            _ => CatalogError::Io {
                path: path.clone(),
                source: e,
            },
        })?;
        // Invalid UTF-8 is replaced, never an error
        let source = String::from_utf8_lossy(&bytes);

        tracing::debug!("Loaded {} '{}' from {:?}", content_type, identifier, path);

        Ok(ContentEntry::from_source(
            content_type,
            identifier,
            &source,
            self.site.config.words_per_minute,
        ))
    }

    /// All published entries of a type, newest first.
    ///
    /// Drafts are dropped. Entries with equal dates keep identifier order.
    pub fn list_entries(&self, content_type: ContentType) -> Result<Vec<ContentEntry>> {
        let mut entries = Vec::new();

        for identifier in self.list_identifiers(content_type) {
            match self.load_entry(content_type, &identifier) {
                Ok(entry) if entry.draft => {
                    tracing::debug!("Skipping draft {} '{}'", content_type, identifier);
                }
                Ok(entry) => entries.push(entry),
                // Removed between enumeration and read
                Err(e) if e.is_not_found() => {
                    tracing::warn!("{}", e);
                }
                Err(e) => return Err(e),
            }
        }

        // Stable sort: ties stay in identifier order
        entries.sort_by_key(|e| std::cmp::Reverse(e.sort_key()));

        Ok(entries)
    }
}

/// Check the file extension exactly, so every identifier opens the file it came from
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == extension)
        .unwrap_or(false)
}

/// An identifier must name a file directly inside the type directory
fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn site_with(files: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        for (rel, body) in files {
            let path = dir.path().join("content").join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        let site = Site::with_config(dir.path(), SiteConfig::default());
        (dir, site)
    }

    fn dated(date: &str, draft: bool) -> String {
        format!("---\ndate: {}\ndraft: {}\n---\nBody\n", date, draft)
    }

    #[test]
    fn test_missing_store_is_empty() {
        let (_dir, site) = site_with(&[]);
        let catalog = site.catalog();
        for content_type in ContentType::ALL {
            assert!(catalog.list_identifiers(content_type).is_empty());
            assert!(catalog.list_entries(content_type).unwrap().is_empty());
        }
    }

    #[test]
    fn test_list_identifiers_filters_extension() {
        let (_dir, site) = site_with(&[
            ("articles/b.mdx", "B"),
            ("articles/a.mdx", "A"),
            ("articles/notes.txt", "skip"),
            ("articles/nested/c.mdx", "too deep"),
            ("projects/p.mdx", "P"),
        ]);
        let catalog = site.catalog();
        assert_eq!(catalog.list_identifiers(ContentType::Article), vec!["a", "b"]);
        assert_eq!(catalog.list_identifiers(ContentType::Project), vec!["p"]);
    }

    #[test]
    fn test_load_entry_not_found() {
        let (_dir, site) = site_with(&[("articles/a.mdx", "A")]);
        let catalog = site.catalog();

        let err = catalog.load_entry(ContentType::Article, "missing").unwrap_err();
        assert!(err.is_not_found());

        // Present under the other type only
        let err = catalog.load_entry(ContentType::Project, "a").unwrap_err();
        assert!(err.is_not_found());

        for bad in ["", "..", "../articles/a", "a/b"] {
            assert!(catalog.load_entry(ContentType::Article, bad).unwrap_err().is_not_found());
        }
    }

    #[test]
    fn test_list_entries_sorted_newest_first() {
        let (_dir, site) = site_with(&[
            ("articles/a.mdx", dated("2024-01-01", false).as_str()),
            ("articles/b.mdx", dated("2024-06-01", false).as_str()),
        ]);
        let entries = site.catalog().list_entries(ContentType::Article).unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_drafts_hidden_from_listing_but_loadable() {
        let (_dir, site) = site_with(&[
            ("articles/a.mdx", dated("2024-01-01", false).as_str()),
            ("articles/c.mdx", dated("2024-09-01", true).as_str()),
        ]);
        let catalog = site.catalog();

        let entries = catalog.list_entries(ContentType::Article).unwrap();
        assert!(entries.iter().all(|e| e.identifier != "c"));
        assert!(entries.iter().all(|e| !e.draft));

        let draft = catalog.load_entry(ContentType::Article, "c").unwrap();
        assert!(draft.draft);
    }

    #[test]
    fn test_undated_sorts_oldest() {
        let (_dir, site) = site_with(&[
            ("projects/undated.mdx", "---\ntitle: Undated\n---\n"),
            ("projects/garbled.mdx", "---\ndate: sometime\n---\n"),
            ("projects/old.mdx", dated("1999-12-31", false).as_str()),
            ("projects/new.mdx", dated("2025-02-02T08:00:00Z", false).as_str()),
        ]);
        let entries = site.catalog().list_entries(ContentType::Project).unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        // Ties keep identifier order
        assert_eq!(ids, vec!["new", "old", "garbled", "undated"]);
        assert_eq!(entries[0].date.as_deref(), Some("2025-02-02"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let (dir, site) = site_with(&[("articles/good.mdx", dated("2024-01-01", false).as_str())]);
        fs::write(
            dir.path().join("content/articles/latin1.mdx"),
            b"---\ntitle: Caf\xe9\n---\nD\xe9j\xe0 vu\n",
        )
        .unwrap();
        let catalog = site.catalog();

        let entry = catalog.load_entry(ContentType::Article, "latin1").unwrap();
        assert_eq!(entry.title, "Caf\u{FFFD}");
        assert!(entry.body.starts_with("D\u{FFFD}j"));

        let entries = catalog.list_entries(ContentType::Article).unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["good", "latin1"]);
    }

    #[test]
    fn test_extension_match_is_exact() {
        let (_dir, site) = site_with(&[
            ("articles/Post.MDX", "upper"),
            ("articles/dup.mdx", "lower"),
            ("articles/dup.MDX", "upper"),
        ]);
        let catalog = site.catalog();

        assert_eq!(catalog.list_identifiers(ContentType::Article), vec!["dup"]);
        assert!(catalog.load_entry(ContentType::Article, "Post").unwrap_err().is_not_found());

        let entries = catalog.list_entries(ContentType::Article).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "lower");
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        let articles = dir.path().join("posts").join("articles");
        fs::create_dir_all(&articles).unwrap();
        fs::write(articles.join("hello.md"), "---\ntitle: Hi\n---\n").unwrap();
        fs::write(articles.join("ignored.mdx"), "").unwrap();

        let config = SiteConfig {
            content_dir: "posts".to_string(),
            content_extension: ".md".to_string(),
            ..Default::default()
        };
        let site = Site::with_config(dir.path(), config);
        let catalog = site.catalog();
        assert_eq!(catalog.list_identifiers(ContentType::Article), vec!["hello"]);
        assert_eq!(catalog.load_entry(ContentType::Article, "hello").unwrap().title, "Hi");
    }
}
