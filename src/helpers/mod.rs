//! Helper functions shared by the sitemap, server and CLI

mod url;

pub use url::*;
