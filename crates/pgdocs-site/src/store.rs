//! Document store accessor.
//!
//! [`DocStore`] resolves slugs to [`Doc`]s through a [`Storage`] backend:
//! it splits front matter, estimates reading time and compiles the body once
//! to derive the outline and the icons the page references.

use std::ops::RangeInclusive;
use std::sync::Arc;

use pgdocs_config::Config;
use pgdocs_renderer::{CompiledContent, IconLibraries, TocEntry, compile_with_source};
use pgdocs_storage::{FsStorage, Storage};
use serde::Serialize;

use crate::error::SiteError;
use crate::frontmatter::{FrontMatter, parse_document};
use crate::icons::load_icon_libraries;
use crate::reading_time::{DEFAULT_WORDS_PER_MINUTE, ReadingTime};

/// A fully resolved document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Doc {
    pub slug: String,
    pub front_matter: FrontMatter,
    /// Markdown body with the front matter removed.
    pub content: String,
    pub reading_time: Option<ReadingTime>,
    /// Headings within the configured level range, in document order.
    pub toc: Vec<TocEntry>,
    /// The referenced icons that resolve against the loaded libraries.
    pub available_icons: IconLibraries,
}

impl Doc {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.front_matter.title
    }
}

/// Fields selectable with [`DocStore::get_all_docs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocField {
    Slug,
    Title,
    Description,
    Category,
    Library,
    Hidden,
    Content,
    ReadingTime,
}

impl DocField {
    fn needs_source(self) -> bool {
        !matches!(self, Self::Slug)
    }
}

/// Projection of a document; unrequested fields are `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PartialDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<ReadingTime>,
}

/// Read access to the docs collection.
pub struct DocStore {
    storage: Arc<dyn Storage>,
    icons: IconLibraries,
    toc_levels: RangeInclusive<u8>,
    words_per_minute: u32,
}

impl DocStore {
    /// Create a store with no icon libraries, outline levels 2–3 and the
    /// default reading speed.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            icons: IconLibraries::new(),
            toc_levels: 2..=3,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Create a filesystem-backed store from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Icons`] if `docs.icons_dir` is set and cannot be
    /// loaded.
    pub fn from_config(config: &Config) -> Result<Self, SiteError> {
        let docs = &config.docs_resolved;
        let storage = Arc::new(FsStorage::new(docs.source_dir.clone()));
        let icons = match &docs.icons_dir {
            Some(dir) => load_icon_libraries(dir)?,
            None => IconLibraries::new(),
        };

        Ok(Self::new(storage)
            .with_icons(icons)
            .with_toc_levels(config.toc.min_level, config.toc.max_level)
            .with_words_per_minute(config.reading.words_per_minute))
    }

    #[must_use]
    pub fn with_icons(mut self, icons: IconLibraries) -> Self {
        self.icons = icons;
        self
    }

    /// Heading levels kept in [`Doc::toc`].
    #[must_use]
    pub fn with_toc_levels(mut self, min: u8, max: u8) -> Self {
        self.toc_levels = min..=max;
        self
    }

    #[must_use]
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    #[must_use]
    pub fn icons(&self) -> &IconLibraries {
        &self.icons
    }

    /// Every document slug, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the backend cannot be listed.
    pub fn slugs(&self) -> Result<Vec<String>, SiteError> {
        let mut slugs = self.storage.scan()?;
        slugs.sort();
        slugs.dedup();
        Ok(slugs)
    }

    /// Resolve a document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] for an unknown slug, front matter
    /// errors for a malformed or untitled document, and
    /// [`SiteError::Storage`] for backend failures.
    pub fn get_doc(&self, slug: &str) -> Result<Doc, SiteError> {
        self.get_doc_with_content(slug).map(|(doc, _)| doc)
    }

    /// Resolve a document together with its compiled body.
    ///
    /// # Errors
    ///
    /// Same as [`get_doc`](Self::get_doc).
    pub fn get_doc_with_content(&self, slug: &str) -> Result<(Doc, CompiledContent), SiteError> {
        let source = self.read(slug)?;
        let (front_matter, body) = parse_document(slug, &source)?;

        let reading_time = ReadingTime::estimate(body, self.words_per_minute);
        let compiled = compile_with_source(body, &front_matter.scope(), &format!("{slug}.md"));

        let toc = compiled
            .toc
            .iter()
            .filter(|entry| self.toc_levels.contains(&entry.level))
            .cloned()
            .collect();
        let available_icons = self.icons.subset(&compiled.icon_refs());

        let doc = Doc {
            slug: slug.to_owned(),
            front_matter,
            content: body.to_owned(),
            reading_time,
            toc,
            available_icons,
        };
        Ok((doc, compiled))
    }

    /// Project the requested fields of every document, sorted by slug.
    ///
    /// Document sources are only read when a field other than
    /// [`DocField::Slug`] is requested.
    ///
    /// # Errors
    ///
    /// Fails on the first document that cannot be read or parsed.
    pub fn get_all_docs(&self, fields: &[DocField]) -> Result<Vec<PartialDoc>, SiteError> {
        let needs_source = fields.iter().any(|field| field.needs_source());

        self.slugs()?
            .into_iter()
            .map(|slug| {
                if needs_source {
                    self.project(slug, fields)
                } else {
                    Ok(PartialDoc {
                        slug: Some(slug),
                        ..PartialDoc::default()
                    })
                }
            })
            .collect()
    }

    fn project(&self, slug: String, fields: &[DocField]) -> Result<PartialDoc, SiteError> {
        let source = self.read(&slug)?;
        let (front_matter, body) = parse_document(&slug, &source)?;

        let mut partial = PartialDoc::default();
        for field in fields {
            match field {
                DocField::Slug => partial.slug = Some(slug.clone()),
                DocField::Title => partial.title = Some(front_matter.title.clone()),
                DocField::Description => partial.description.clone_from(&front_matter.description),
                DocField::Category => partial.category.clone_from(&front_matter.category),
                DocField::Library => partial.library.clone_from(&front_matter.library),
                DocField::Hidden => partial.hidden = Some(front_matter.hidden),
                DocField::Content => partial.content = Some(body.to_owned()),
                DocField::ReadingTime => {
                    partial.reading_time = ReadingTime::estimate(body, self.words_per_minute);
                }
            }
        }
        Ok(partial)
    }

    fn read(&self, slug: &str) -> Result<String, SiteError> {
        self.storage.read(slug).map_err(|e| {
            if e.is_not_found() {
                SiteError::NotFound(slug.to_owned())
            } else {
                SiteError::Storage(e)
            }
        })
    }
}
