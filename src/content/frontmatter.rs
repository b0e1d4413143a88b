//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Render a scalar YAML value as a string, dropping anything structured
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accepts strings and numbers; anything else becomes `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

/// Handles both a single string and a list of strings.
/// Items that are not scalars are dropped.
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let tags = match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
        other => scalar_to_string(&other).into_iter().collect(),
    };
    Ok(tags)
}

/// Booleans, or the strings "true"/"false"; everything else is false
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Kept raw; see [`super::date::normalize_date`]
    pub date: Value,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub draft: bool,
    /// Link to the live site or external write-up
    #[serde(deserialize_with = "lenient_string")]
    pub external: Option<String>,
    /// Source repository link
    #[serde(deserialize_with = "lenient_string")]
    pub repo: Option<String>,
    /// Hero/cover image URL or path
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl FrontMatter {
    /// Split a content file into front-matter and body.
    ///
    /// The file must open with a `---` line and the block ends at the next
    /// `---` line. Without that structure the whole file is body. A block
    /// that is not valid YAML is replaced by defaults.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start_matches('\u{feff}');

        let Some(rest) = content.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches([' ', '\t']);
        let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
            Some(rest) => rest,
            // "----" or "--- text": not a front-matter fence
            None => return (FrontMatter::default(), content),
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml = &rest[..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
                return (Self::from_yaml(yaml), body);
            }
            offset += line.len();
        }

        // No closing ---, treat as no front-matter
        (FrontMatter::default(), content)
    }

    fn from_yaml(yaml: &str) -> Self {
        if yaml.trim().is_empty() {
            return FrontMatter::default();
        }

        match serde_yaml::from_str::<FrontMatter>(yaml) {
            Ok(fm) => fm,
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, using defaults: {}", e);
                FrontMatter::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
description: First post
date: 2024-01-15
tags:
  - rust
  - web
draft: false
repo: https://github.com/example/hello
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.description.as_deref(), Some("First post"));
        assert_eq!(fm.date, Value::String("2024-01-15".to_string()));
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert!(!fm.draft);
        assert_eq!(fm.repo.as_deref(), Some("https://github.com/example/hello"));
        assert_eq!(body, "This is the content.\n");
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = "---\ntitle: Single Tag\ntags: Notes\n---\nBody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.tags, vec!["Notes"]);
    }

    #[test]
    fn test_malformed_fields_are_defaulted() {
        let content = r#"---
title: 2024
tags:
  - ok
  - { nested: map }
  - 7
draft: "yes please"
image: [not, a, string]
---
Body
"#;
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("2024"));
        assert_eq!(fm.tags, vec!["ok", "7"]);
        assert!(!fm.draft);
        assert_eq!(fm.image, None);
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn test_draft_string_flag() {
        let (fm, _) = FrontMatter::parse("---\ndraft: \"true\"\n---\n");
        assert!(fm.draft);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\nNo metadata here.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(fm.tags.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unterminated_block_is_body() {
        let content = "---\ntitle: Never closed\n\nStill going.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_yaml_falls_back_to_defaults() {
        let content = "---\ntitle: [unclosed\n---\nThe body survives.\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(body, "The body survives.\n");
    }

    #[test]
    fn test_empty_block_and_crlf() {
        let (fm, body) = FrontMatter::parse("---\r\n---\r\nBody\r\n");
        assert_eq!(fm.title, None);
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let (fm, _) = FrontMatter::parse("---\ntitle: T\nfeatured: true\n---\n");
        assert_eq!(fm.extra.get("featured"), Some(&Value::Bool(true)));
    }
}
