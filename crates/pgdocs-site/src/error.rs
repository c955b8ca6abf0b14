//! Error types for document access and site building.

use std::path::PathBuf;

use pgdocs_storage::StorageError;

/// Error returned when a document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No document exists for the slug.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Storage backend failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Front matter is not valid YAML or has the wrong shape.
    #[error("Invalid front matter in {slug}: {message}")]
    FrontMatter { slug: String, message: String },

    /// Front matter has no (or an empty) `title`.
    #[error("Missing title in front matter of {0}")]
    MissingTitle(String),

    /// An icon library file could not be read or parsed.
    #[error("Failed to load icons from {}: {message}", path.display())]
    Icons { path: PathBuf, message: String },
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Site(#[from] SiteError),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
