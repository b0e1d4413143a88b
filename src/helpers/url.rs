//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::content::ContentEntry;

/// Everything except unreserved characters (RFC 3986) inside one path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/articles") // -> "https://example.com/articles"
/// full_url_for(&config, "/")         // -> "https://example.com/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}/{}", config.base_url(), path.trim_start_matches('/'))
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Absolute URL of an entry's detail page
pub fn entry_url(config: &SiteConfig, entry: &ContentEntry) -> String {
    full_url_for(
        config,
        &format!(
            "{}/{}",
            entry.content_type.dir_name(),
            encode_segment(&entry.identifier)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentType;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/"), "https://example.com/");
        assert_eq!(full_url_for(&config, "/links"), "https://example.com/links");
        assert_eq!(full_url_for(&config, "articles"), "https://example.com/articles");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("hello-world_2.0~x"), "hello-world_2.0~x");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("café"), "caf%C3%A9");
    }

    #[test]
    fn test_entry_url() {
        let entry = ContentEntry::from_source(ContentType::Project, "my tool", "", 200);
        assert_eq!(
            entry_url(&test_config(), &entry),
            "https://example.com/projects/my%20tool"
        );
    }
}
