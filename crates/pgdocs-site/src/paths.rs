//! Static path enumeration.
//!
//! Every document becomes exactly one page at `/<prefix>/<slug>`. There is
//! no fallback route: a slug outside the enumerated set is not found.

use std::path::{Path, PathBuf};

use crate::error::SiteError;
use crate::store::DocStore;

/// Default first route segment.
pub const DEFAULT_ROUTE_PREFIX: &str = "docs";

/// One statically generated page.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StaticPath {
    prefix: String,
    segments: Vec<String>,
}

impl StaticPath {
    #[must_use]
    pub fn new(prefix: &str, slug: &str) -> Self {
        Self {
            prefix: prefix.trim_matches('/').to_owned(),
            segments: slug.split('/').map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn slug(&self) -> String {
        self.segments.join("/")
    }

    /// URL path, e.g. `/docs/guides/react`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}/{}", self.prefix, self.slug())
    }

    /// File the page is written to: `<out>/<prefix>/<slug>/index.html`.
    #[must_use]
    pub fn output_file(&self, out_dir: &Path) -> PathBuf {
        let mut path = out_dir.join(&self.prefix);
        path.extend(&self.segments);
        path.join("index.html")
    }
}

/// The full set of pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticPaths {
    pub paths: Vec<StaticPath>,
    /// Always `false`: unknown slugs are never rendered on demand.
    pub fallback: bool,
}

impl StaticPaths {
    /// One path per document under the default `docs` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if documents cannot be listed.
    pub fn enumerate(store: &DocStore) -> Result<Self, SiteError> {
        Self::enumerate_under(store, DEFAULT_ROUTE_PREFIX)
    }

    /// One path per document under `prefix`, sorted by slug.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if documents cannot be listed.
    pub fn enumerate_under(store: &DocStore, prefix: &str) -> Result<Self, SiteError> {
        let mut paths: Vec<_> = store
            .slugs()?
            .iter()
            .map(|slug| StaticPath::new(prefix, slug))
            .collect();
        paths.sort();
        paths.dedup();

        tracing::debug!(count = paths.len(), prefix, "Enumerated static paths");
        Ok(Self {
            paths,
            fallback: false,
        })
    }

    #[must_use]
    pub fn resolve(&self, slug: &str) -> Option<&StaticPath> {
        let segments: Vec<&str> = slug.split('/').collect();
        self.paths.iter().find(|path| path.segments == segments)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StaticPath> {
        self.paths.iter()
    }
}

impl<'a> IntoIterator for &'a StaticPaths {
    type Item = &'a StaticPath;
    type IntoIter = std::slice::Iter<'a, StaticPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use pgdocs_storage::MockStorage;
    use pretty_assertions::assert_eq;

    use super::*;

    fn store(slugs: &[&str]) -> DocStore {
        let storage = MockStorage::new();
        for slug in slugs {
            storage.insert(*slug, "---\ntitle: T\n---\n");
        }
        DocStore::new(Arc::new(storage))
    }

    #[test]
    fn test_static_path_route_and_output() {
        let path = StaticPath::new("docs", "library/mdi/getting-started/react");

        assert_eq!(path.slug(), "library/mdi/getting-started/react");
        assert_eq!(path.route(), "/docs/library/mdi/getting-started/react");
        assert_eq!(
            path.output_file(Path::new("/out")),
            Path::new("/out/docs/library/mdi/getting-started/react/index.html")
        );
    }

    #[test]
    fn test_enumerate_one_path_per_slug() {
        let slugs = ["why-svg", "guides/react", "guides/angular", "about"];
        let paths = StaticPaths::enumerate(&store(&slugs)).unwrap();

        assert_eq!(paths.len(), slugs.len());
        assert!(!paths.fallback);
        let routes: HashSet<_> = paths.iter().map(StaticPath::route).collect();
        assert_eq!(routes.len(), slugs.len());
        for slug in slugs {
            assert!(paths.resolve(slug).is_some(), "{slug} missing");
        }
    }

    #[test]
    fn test_enumerate_is_sorted() {
        let paths = StaticPaths::enumerate(&store(&["b", "a/z", "a"])).unwrap();

        let slugs: Vec<_> = paths.iter().map(StaticPath::slug).collect();
        assert_eq!(slugs, vec!["a", "a/z", "b"]);
    }

    #[test]
    fn test_resolve_unknown_slug() {
        let paths = StaticPaths::enumerate(&store(&["guides/react"])).unwrap();

        assert_eq!(paths.resolve("guides/vue"), None);
        assert_eq!(paths.resolve("guides"), None);
    }

    #[test]
    fn test_enumerate_under_prefix() {
        let paths = StaticPaths::enumerate_under(&store(&["a"]), "/help/").unwrap();

        assert_eq!(paths.paths[0].route(), "/help/a");
    }

    #[test]
    fn test_empty_collection() {
        let paths = StaticPaths::enumerate(&store(&[])).unwrap();

        assert!(paths.is_empty());
    }
}
