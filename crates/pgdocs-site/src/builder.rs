//! Static site builder.
//!
//! Enumerates every page, runs store → compiler → composer for each, and
//! writes the result to `<out>/<prefix>/<slug>/index.html`. Pages are
//! independent, so the build fans out over the rayon pool.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{BuildError, SiteError};
use crate::page::{ComposedPage, PageComposer};
use crate::paths::{StaticPath, StaticPaths};
use crate::settings::SiteSettings;
use crate::store::DocStore;

/// A compile or render warning for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWarning {
    pub slug: String,
    pub message: String,
}

/// Outcome of a successful build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of pages written.
    pub pages: usize,
    /// Warnings in page order.
    pub warnings: Vec<PageWarning>,
}

/// Builds the static docs pages.
pub struct StaticSiteBuilder {
    store: DocStore,
    composer: PageComposer,
    parallel: bool,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(store: DocStore, settings: SiteSettings) -> Self {
        Self {
            store,
            composer: PageComposer::new(settings),
            parallel: true,
        }
    }

    /// Render pages on the rayon pool (default) or one at a time.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn store(&self) -> &DocStore {
        &self.store
    }

    /// Every page this builder writes.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if documents cannot be listed.
    pub fn paths(&self) -> Result<StaticPaths, SiteError> {
        StaticPaths::enumerate_under(&self.store, &self.composer.settings().route_prefix)
    }

    /// Compose a single page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] for an unknown slug and any error
    /// [`DocStore::get_doc`] reports.
    pub fn render_slug(&self, slug: &str) -> Result<ComposedPage, SiteError> {
        let (doc, compiled) = self.store.get_doc_with_content(slug)?;
        Ok(self.composer.compose(&doc, compiled))
    }

    /// Write every page under `out_dir`.
    ///
    /// # Errors
    ///
    /// Stops at the first page that fails to load or write.
    pub fn build(&self, out_dir: &Path) -> Result<BuildReport, BuildError> {
        let paths = self.paths()?;
        tracing::info!(
            pages = paths.len(),
            out_dir = %out_dir.display(),
            parallel = self.parallel,
            "Building docs"
        );

        let results: Vec<Vec<PageWarning>> = if self.parallel {
            paths
                .paths
                .par_iter()
                .map(|path| self.build_page(path, out_dir))
                .collect::<Result<_, _>>()?
        } else {
            paths
                .iter()
                .map(|path| self.build_page(path, out_dir))
                .collect::<Result<_, _>>()?
        };

        let report = BuildReport {
            pages: results.len(),
            warnings: results.into_iter().flatten().collect(),
        };
        tracing::info!(
            pages = report.pages,
            warnings = report.warnings.len(),
            "Build complete"
        );
        Ok(report)
    }

    fn build_page(&self, path: &StaticPath, out_dir: &Path) -> Result<Vec<PageWarning>, BuildError> {
        let slug = path.slug();
        let page = self.render_slug(&slug)?;

        let file = path.output_file(out_dir);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        fs::write(&file, page.to_html()).map_err(|e| BuildError::io(&file, e))?;
        tracing::debug!(slug = %slug, file = %file.display(), "Wrote page");

        Ok(page
            .warnings
            .into_iter()
            .map(|message| {
                tracing::warn!(slug = %slug, warning = %message, "Page warning");
                PageWarning {
                    slug: slug.clone(),
                    message,
                }
            })
            .collect())
    }
}
