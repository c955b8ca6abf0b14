//! Icon references and icon path data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Library used when a reference has no `library:` prefix.
pub const DEFAULT_LIBRARY: &str = "mdi";

/// `library:name` reference to a single icon.
///
/// ```
/// use pgdocs_renderer::IconRef;
///
/// let icon = IconRef::parse("mdi:home").unwrap();
/// assert_eq!(icon.library, "mdi");
/// assert_eq!(icon.name, "home");
/// assert_eq!(IconRef::parse("github").unwrap().to_string(), "mdi:github");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconRef {
    pub library: String,
    pub name: String,
}

impl IconRef {
    /// Parse `library:name` or a bare `name`. Names are kebab-case
    /// (`[a-z0-9-]`); anything else is rejected.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (library, name) = s.split_once(':').unwrap_or((DEFAULT_LIBRARY, s));
        let valid = |part: &str| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        };
        (valid(library) && valid(name)).then(|| Self {
            library: library.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.library, self.name)
    }
}

/// Icon path data: library name → icon name → SVG path `d` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconLibraries(BTreeMap<String, BTreeMap<String, String>>);

impl IconLibraries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a whole library.
    pub fn insert_library(&mut self, library: impl Into<String>, icons: BTreeMap<String, String>) {
        self.0.insert(library.into(), icons);
    }

    /// Add a single icon.
    pub fn insert(&mut self, icon: &IconRef, path: impl Into<String>) {
        self.0
            .entry(icon.library.clone())
            .or_default()
            .insert(icon.name.clone(), path.into());
    }

    #[must_use]
    pub fn get(&self, icon: &IconRef) -> Option<&str> {
        self.0.get(&icon.library)?.get(&icon.name).map(String::as_str)
    }

    /// The icons among `refs` that resolve, preserving their library grouping.
    #[must_use]
    pub fn subset<'a>(&self, refs: impl IntoIterator<Item = &'a IconRef>) -> Self {
        let mut out = Self::new();
        for icon in refs {
            if let Some(path) = self.get(icon) {
                out.insert(icon, path);
            }
        }
        out
    }

    /// Number of icons across all libraries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every icon as `(reference, path)`, ordered by library then name.
    pub fn iter(&self) -> impl Iterator<Item = (IconRef, &str)> {
        self.0.iter().flat_map(|(library, icons)| {
            icons.iter().map(move |(name, path)| {
                (
                    IconRef {
                        library: library.clone(),
                        name: name.clone(),
                    },
                    path.as_str(),
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(s: &str) -> IconRef {
        IconRef::parse(s).unwrap()
    }

    #[test]
    fn test_parse_rejects_bad_refs() {
        assert_eq!(IconRef::parse(""), None);
        assert_eq!(IconRef::parse("mdi:"), None);
        assert_eq!(IconRef::parse(":home"), None);
        assert_eq!(IconRef::parse("mdi:Home"), None);
        assert_eq!(IconRef::parse("mdi:home icon"), None);
        assert_eq!(IconRef::parse("a:b:c"), None);
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(icon("  mdi:home "), icon("mdi:home"));
    }

    #[test]
    fn test_subset_keeps_only_resolved() {
        let mut all = IconLibraries::new();
        all.insert(&icon("mdi:home"), "M10,20V14H14V20");
        all.insert(&icon("mdi:github"), "M12,2A10");
        all.insert(&icon("simple:rust"), "M0,0");

        let wanted = [icon("mdi:home"), icon("mdi:missing"), icon("simple:rust")];
        let subset = all.subset(&wanted);

        assert_eq!(subset.len(), 2);
        assert_eq!(subset.get(&icon("mdi:home")), Some("M10,20V14H14V20"));
        assert_eq!(subset.get(&icon("mdi:github")), None);
        assert_eq!(subset.libraries().collect::<Vec<_>>(), vec!["mdi", "simple"]);
    }

    #[test]
    fn test_serializes_as_nested_object() {
        let mut libs = IconLibraries::new();
        libs.insert(&icon("mdi:home"), "M1");
        assert_eq!(
            serde_json::to_string(&libs).unwrap(),
            r#"{"mdi":{"home":"M1"}}"#
        );
    }
}
