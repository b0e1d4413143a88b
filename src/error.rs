//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

use crate::content::ContentType;

/// Errors surfaced by catalog queries.
///
/// Everything short of a missing backing file is defaulted while loading,
/// so callers only ever need to distinguish "not found" from a broken store.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No {content_type} entry named '{identifier}'")]
    NotFound {
        content_type: ContentType,
        identifier: String,
    },

    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn not_found(content_type: ContentType, identifier: &str) -> Self {
        Self::NotFound {
            content_type,
            identifier: identifier.to_string(),
        }
    }

    /// Whether this error means the requested entry does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
