//! Storage trait and error types.
//!
//! # Slug Convention
//!
//! Every method takes a slug, never a file path:
//! - `"getting-started"` - `getting-started.md` at the docs root
//! - `"mdi/angular"` - `mdi/angular.md`
//!
//! Slugs use `/` as separator on every platform.

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// No document for the slug.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Slug escapes the docs root or is otherwise malformed.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

impl StorageErrorKind {
    fn label(&self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::PermissionDenied => "Permission denied",
            Self::InvalidPath => "Invalid path",
            Self::Other => "Error",
        }
    }
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path or slug context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Whether this error means the document does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }

    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // "[Backend] Kind: source (path: docs/foo.md)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }
        f.write_str(self.kind.label())?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Source of markdown documents.
///
/// Implementations map slugs to their own storage format and must be safe to
/// share across the build worker threads.
pub trait Storage: Send + Sync {
    /// List every document slug, sorted and without duplicates.
    ///
    /// A missing docs root yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be listed.
    fn scan(&self) -> Result<Vec<String>, StorageError>;

    /// Read the raw source (front matter included) of a document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] with [`StorageErrorKind::NotFound`] for an
    /// unknown slug and [`StorageErrorKind::InvalidPath`] for a slug that
    /// escapes the docs root.
    fn read(&self, slug: &str) -> Result<String, StorageError>;

    /// Check whether a document exists. Errors count as "doesn't exist".
    fn exists(&self, slug: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_storage_error_new() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(err.path.is_none());
        assert!(err.backend.is_none());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_storage_error_not_found_carries_path() {
        let err = StorageError::not_found("docs/missing.md");

        assert!(err.is_not_found());
        assert_eq!(err.path.as_deref(), Some(Path::new("docs/missing.md")));
    }

    #[test]
    fn test_storage_error_io_kinds() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            StorageError::io(not_found, None).kind,
            StorageErrorKind::NotFound
        );

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(
            StorageError::io(denied, None).kind,
            StorageErrorKind::PermissionDenied
        );

        let other = std::io::Error::other("disk on fire");
        let err = StorageError::io(other, Some(PathBuf::from("a.md")));
        assert_eq!(err.kind, StorageErrorKind::Other);
        assert!(err.downcast_source::<std::io::Error>().is_some());
    }

    #[test]
    fn test_storage_error_display_simple() {
        let err = StorageError::new(StorageErrorKind::InvalidPath);

        assert_eq!(err.to_string(), "Invalid path");
    }

    #[test]
    fn test_storage_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::new(StorageErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("docs/icons.md")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: docs/icons.md)"
        );
    }

    #[test]
    fn test_storage_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorageError>();
    }
}
