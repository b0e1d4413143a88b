//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::ContentType;
use crate::Site;

/// Format a listing of `what`: a content type, or `tag`/`tags`
pub fn render(site: &Site, what: &str) -> Result<String> {
    let catalog = site.catalog();
    let mut out = String::new();

    match what {
        "tag" | "tags" => {
            let mut tags: HashMap<String, usize> = HashMap::new();
            for content_type in ContentType::ALL {
                for entry in catalog.list_entries(content_type)? {
                    for tag in entry.tags {
                        *tags.entry(tag).or_insert(0) += 1;
                    }
                }
            }
            out.push_str(&format!("Tags ({}):\n", tags.len()));
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                out.push_str(&format!("  {} ({})\n", tag, count));
            }
        }
        other => {
            let content_type: ContentType = other.parse().map_err(anyhow::Error::msg)?;
            let entries = catalog.list_entries(content_type)?;
            out.push_str(&format!(
                "{} ({}):\n",
                capitalize(content_type.dir_name()),
                entries.len()
            ));
            for entry in entries {
                out.push_str(&format!(
                    "  {} - {} [{}] {}\n",
                    entry.date.as_deref().unwrap_or("----------"),
                    entry.title,
                    entry.identifier,
                    entry.reading_time
                ));
            }
        }
    }

    Ok(out)
}

/// List site content by type
pub fn run(site: &Site, what: &str) -> Result<()> {
    print!("{}", render(site, what)?);
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
