//! Document source storage for pgdocs.
//!
//! The [`Storage`] trait hides where markdown sources live. Documents are
//! addressed by slug, the source path relative to the docs root without
//! its `.md` extension (`"getting-started"`, `"mdi/angular"`).
//!
//! - [`FsStorage`] reads `<source_dir>/<slug>.md` from disk
//! - [`MockStorage`] keeps documents in memory (behind the `mock` feature)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use pgdocs_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for slug in storage.scan()? {
//!     let source = storage.read(&slug)?;
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
