//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`], which maps slug `a/b` to `<source_dir>/a/b.md`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Directory names never scanned for documents.
const SKIPPED_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    "out",
    "vendor",
    "__pycache__",
];

/// Filesystem storage rooted at a docs source directory.
///
/// Hidden entries and entries starting with `_` are ignored, as are common
/// tooling directories such as `node_modules`.
pub struct FsStorage {
    source_dir: PathBuf,
}

impl FsStorage {
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory documents are read from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Reject slugs that could escape the source directory.
    fn validate_slug(slug: &str) -> Result<(), StorageError> {
        let path = Path::new(slug);
        let escapes = slug.is_empty()
            || path
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(slug)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    fn file_for(&self, slug: &str) -> PathBuf {
        self.source_dir.join(format!("{slug}.md"))
    }

    fn scan_directory(dir_path: &Path, prefix: &str, slugs: &mut Vec<String>) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir_path.display(), error = %e, "Skipping unreadable directory");
                return;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                if SKIPPED_DIRS.contains(&name.as_str()) {
                    continue;
                }
                let nested = format!("{prefix}{name}/");
                Self::scan_directory(&entry.path(), &nested, slugs);
            } else if let Some(stem) = name.strip_suffix(".md")
                && !stem.is_empty()
            {
                slugs.push(format!("{prefix}{stem}"));
            }
        }
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<String>, StorageError> {
        if !self.source_dir.exists() {
            tracing::debug!(dir = %self.source_dir.display(), "Docs directory missing");
            return Ok(Vec::new());
        }
        if !self.source_dir.is_dir() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(&self.source_dir)
                .with_backend(BACKEND));
        }

        let mut slugs = Vec::new();
        Self::scan_directory(&self.source_dir, "", &mut slugs);
        slugs.sort();
        slugs.dedup();
        Ok(slugs)
    }

    fn read(&self, slug: &str) -> Result<String, StorageError> {
        Self::validate_slug(slug)?;
        let path = self.file_for(slug);
        fs::read_to_string(&path)
            .map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn exists(&self, slug: &str) -> bool {
        Self::validate_slug(slug).is_ok() && self.file_for(slug).is_file()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_fs_storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FsStorage>();
    }

    #[test]
    fn test_scan_missing_dir() {
        let storage = FsStorage::new(PathBuf::from("/nonexistent/docs"));
        assert!(storage.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_file_as_root_is_invalid() {
        let temp = create_test_dir();
        write(temp.path(), "docs", "not a dir");

        let storage = FsStorage::new(temp.path().join("docs"));
        let err = storage.scan().unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_scan_returns_sorted_slugs() {
        let temp = create_test_dir();
        write(temp.path(), "why-svg.md", "# Why");
        write(temp.path(), "getting-started.md", "# Start");
        write(temp.path(), "mdi/angular.md", "# Angular");
        write(temp.path(), "mdi/react.md", "# React");
        write(temp.path(), "notes.txt", "ignored");

        let storage = FsStorage::new(temp.path().to_path_buf());

        assert_eq!(
            storage.scan().unwrap(),
            vec!["getting-started", "mdi/angular", "mdi/react", "why-svg"]
        );
    }

    #[test]
    fn test_scan_skips_hidden_underscore_and_tooling() {
        let temp = create_test_dir();
        write(temp.path(), "visible.md", "# Visible");
        write(temp.path(), ".hidden.md", "# Hidden");
        write(temp.path(), "_draft.md", "# Draft");
        write(temp.path(), "_partials/header.md", "# Partial");
        write(temp.path(), "node_modules/pkg/readme.md", "# Pkg");

        let storage = FsStorage::new(temp.path().to_path_buf());

        assert_eq!(storage.scan().unwrap(), vec!["visible"]);
    }

    #[test]
    fn test_read_nested_slug() {
        let temp = create_test_dir();
        write(temp.path(), "mdi/angular.md", "---\ntitle: Angular\n---\nBody");

        let storage = FsStorage::new(temp.path().to_path_buf());

        assert_eq!(
            storage.read("mdi/angular").unwrap(),
            "---\ntitle: Angular\n---\nBody"
        );
    }

    #[test]
    fn test_read_missing_slug() {
        let temp = create_test_dir();
        let storage = FsStorage::new(temp.path().to_path_buf());

        let err = storage.read("missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_read_rejects_path_traversal() {
        let temp = create_test_dir();
        let storage = FsStorage::new(temp.path().join("docs"));

        for slug in ["../secret", "mdi/../../secret", "/etc/passwd", ""] {
            let err = storage.read(slug).unwrap_err();
            assert_eq!(err.kind, StorageErrorKind::InvalidPath, "slug {slug:?}");
        }
    }

    #[test]
    fn test_exists() {
        let temp = create_test_dir();
        write(temp.path(), "guide.md", "# Guide");
        fs::create_dir_all(temp.path().join("folder.md")).unwrap();

        let storage = FsStorage::new(temp.path().to_path_buf());

        assert!(storage.exists("guide"));
        assert!(!storage.exists("missing"));
        assert!(!storage.exists("folder"));
        assert!(!storage.exists("../guide"));
    }
}
