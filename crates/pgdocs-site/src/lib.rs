//! Docs pages for pgdocs.
//!
//! This crate provides:
//! - [`DocStore`]: slug → [`Doc`] resolution (front matter, reading time,
//!   outline, available icons) and field projections over all documents
//! - [`StaticPaths`]: the page set, with no fallback route
//! - [`PageComposer`]: head metadata, breadcrumbs, body and aside for a page
//! - [`StaticSiteBuilder`]: writes every page to disk
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::{Path, PathBuf};
//! use std::sync::Arc;
//! use pgdocs_site::{DocStore, SiteSettings, StaticSiteBuilder};
//! use pgdocs_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
//! let builder = StaticSiteBuilder::new(DocStore::new(storage), SiteSettings::default());
//!
//! // Render one page
//! let page = builder.render_slug("getting-started")?;
//! println!("{}", page.to_html());
//!
//! // Write them all
//! let report = builder.build(Path::new("dist"))?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod frontmatter;
mod icons;
mod links;
mod meta;
mod page;
mod paths;
mod reading_time;
mod settings;
mod store;
mod template;

pub use builder::{BuildReport, PageWarning, StaticSiteBuilder};
pub use error::{BuildError, SiteError};
pub use frontmatter::{FrontMatter, parse_document, split as split_front_matter};
pub use icons::load_icon_libraries;
pub use links::{edit_url, encode_uri_component, issue_url};
pub use meta::{MetaTag, page_meta, page_title};
pub use page::{Breadcrumb, ComposedPage, PageComposer};
pub use paths::{DEFAULT_ROUTE_PREFIX, StaticPath, StaticPaths};
pub use reading_time::{DEFAULT_WORDS_PER_MINUTE, ReadingTime};
pub use settings::{AdSlot, SiteSettings};
pub use store::{Doc, DocField, DocStore, PartialDoc};

// Re-export TocEntry from pgdocs-renderer for convenience
pub use pgdocs_renderer::TocEntry;
