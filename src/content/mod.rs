//! Content module - front-matter, entries, and the catalog over them

mod catalog;
pub mod date;
mod entry;
mod frontmatter;
mod markdown;
pub mod reading_time;

pub use catalog::Catalog;
pub use entry::{ContentEntry, ContentType};
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
