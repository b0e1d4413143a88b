//! Write the sitemap

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::{sitemap, Site};

/// Render `sitemap.xml` to `output`, or stdout when no path is given
pub fn run(site: &Site, output: Option<&Path>) -> Result<()> {
    let urls = sitemap::build(site, chrono::Utc::now())?;
    let xml = sitemap::render_xml(&urls);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, xml)?;
            tracing::info!("Wrote {} urls to {:?}", urls.len(), path);
        }
        None => print!("{}", xml),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_sitemap_file() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        let output = dir.path().join("public").join("sitemap.xml");

        run(&site, Some(&output)).unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<loc>http://example.com/</loc>"));
        assert_eq!(xml.matches("<url>").count(), 4);
    }
}
