//! Sitemap generation

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::ChangeFrequency;
use crate::content::{date, ContentType};
use crate::error::Result;
use crate::helpers::{entry_url, full_url_for};
use crate::Site;

/// One `<url>` record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapUrl {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

/// Collect sitemap records: the configured static routes, then every
/// listed article, then every listed project.
///
/// Entries without a usable date, and all static routes, are stamped `now`.
pub fn build(site: &Site, now: DateTime<Utc>) -> Result<Vec<SitemapUrl>> {
    let config = &site.config;

    let mut urls: Vec<SitemapUrl> = config
        .sitemap
        .iter()
        .map(|route| SitemapUrl {
            loc: full_url_for(config, &route.path),
            last_modified: now,
            change_frequency: route.change_frequency,
            priority: route.priority,
        })
        .collect();

    let catalog = site.catalog();
    for content_type in ContentType::ALL {
        for entry in catalog.list_entries(content_type)? {
            let last_modified = entry
                .date
                .as_deref()
                .and_then(date::parse_loose)
                .unwrap_or(now);
            urls.push(SitemapUrl {
                loc: entry_url(config, &entry),
                last_modified,
                change_frequency: None,
                priority: None,
            });
        }
    }

    tracing::debug!("Sitemap has {} urls", urls.len());
    Ok(urls)
}

/// Render records as a sitemaps.org `urlset` document
pub fn render_xml(urls: &[SitemapUrl]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            url.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        if let Some(freq) = url.change_frequency {
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", freq));
        }
        if let Some(priority) = url.priority {
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", priority));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
