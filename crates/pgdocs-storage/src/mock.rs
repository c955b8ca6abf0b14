//! Mock storage implementation for testing.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::storage::{Storage, StorageError};

const BACKEND: &str = "Mock";

/// In-memory storage for tests.
///
/// # Example
///
/// ```ignore
/// use pgdocs_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_doc("getting-started", "---\ntitle: Getting Started\n---\nHello.");
///
/// assert_eq!(storage.scan().unwrap(), vec!["getting-started"]);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    docs: RwLock<BTreeMap<String, String>>,
}

impl MockStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document source under `slug`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_doc(self, slug: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(slug, source);
        self
    }

    /// Insert or replace a document after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, slug: impl Into<String>, source: impl Into<String>) {
        self.docs.write().unwrap().insert(slug.into(), source.into());
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.docs.read().unwrap().keys().cloned().collect())
    }

    fn read(&self, slug: &str) -> Result<String, StorageError> {
        self.docs
            .read()
            .unwrap()
            .get(slug)
            .cloned()
            .ok_or_else(|| StorageError::not_found(slug).with_backend(BACKEND))
    }

    fn exists(&self, slug: &str) -> bool {
        self.docs.read().unwrap().contains_key(slug)
    }
}
