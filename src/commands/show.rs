//! Show a single entry

use anyhow::Result;

use crate::content::ContentType;
use crate::Site;

/// Format one entry as JSON metadata, or as its rendered HTML body
pub fn render(site: &Site, content_type: ContentType, identifier: &str, html: bool) -> Result<String> {
    let entry = site.catalog().load_entry(content_type, identifier)?;

    if html {
        return site.renderer().render(&entry.body);
    }

    Ok(serde_json::to_string_pretty(&entry)?)
}

/// Print an entry
pub fn run(site: &Site, content_type: ContentType, identifier: &str, html: bool) -> Result<()> {
    println!("{}", render(site, content_type, identifier, html)?);
    Ok(())
}
