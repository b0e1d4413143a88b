//! Create a new article or project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentType;
use crate::Site;

const DEFAULT_SCAFFOLD: &str = r#"---
title: {{ title }}
description: ""
date: {{ date }}
tags: []
draft: true
---

"#;

/// Quote a value for a double-quoted YAML scalar
fn yaml_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Create a draft entry named after the slugified title (or `slug`)
pub fn create_entry(
    site: &Site,
    content_type: ContentType,
    title: &str,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let identifier = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if identifier.is_empty() {
        anyhow::bail!("Cannot derive a file name from title: {:?}", title);
    }

    let target_dir = site.catalog().type_dir(content_type);
    fs::create_dir_all(&target_dir)?;

    let extension = site.config.content_extension.trim_start_matches('.');
    let file_path = target_dir.join(format!("{}.{}", identifier, extension));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template
    let scaffold_path = site
        .base_dir
        .join("scaffolds")
        .join(format!("{}.{}", content_type.dir_name(), extension));
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    let content = scaffold_content
        .replace("{{ title }}", &yaml_quote(title))
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    fs::write(&file_path, content)?;
    tracing::info!("Created {} '{}'", content_type, identifier);

    Ok(file_path)
}

/// Run the new command
pub fn run(site: &Site, content_type: ContentType, title: &str, slug: Option<&str>) -> Result<()> {
    let path = create_entry(site, content_type, title, slug)?;
    println!("Created: {:?}", path);
    Ok(())
}
