//! YAML front matter at the top of a document.
//!
//! A document may open with a block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Angular
//! library: Material Design Icons
//! category: Installation
//! ---
//! # Body
//! ```

use std::collections::BTreeMap;

use pgdocs_renderer::Scope;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SiteError;

const FENCE: &str = "---";

/// Parsed front matter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Icon library the page belongs to (e.g. "Material Design Icons").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    /// Hidden pages are built but marked `noindex`.
    #[serde(default)]
    pub hidden: bool,

    /// Every other key, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// Parse a front matter block (without its fences).
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::FrontMatter`] for malformed YAML and
    /// [`SiteError::MissingTitle`] when `title` is absent or blank.
    pub fn from_yaml(slug: &str, yaml: &str) -> Result<Self, SiteError> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Err(SiteError::MissingTitle(slug.to_owned()));
        }

        let front_matter: Self =
            serde_yaml::from_str(trimmed).map_err(|e| SiteError::FrontMatter {
                slug: slug.to_owned(),
                message: format!("Invalid YAML: {e}"),
            })?;

        if front_matter.title.trim().is_empty() {
            return Err(SiteError::MissingTitle(slug.to_owned()));
        }
        Ok(front_matter)
    }

    /// Values visible to `:meta[...]` while compiling the body.
    #[must_use]
    pub fn scope(&self) -> Scope {
        let mut scope: Scope = self
            .extra
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        scope.insert("title", self.title.as_str());
        if let Some(description) = &self.description {
            scope.insert("description", description.as_str());
        }
        if let Some(category) = &self.category {
            scope.insert("category", category.as_str());
        }
        if let Some(library) = &self.library {
            scope.insert("library", library.as_str());
        }
        scope.insert("hidden", self.hidden);
        scope
    }
}

/// Split a source file into its front matter block and body.
///
/// Returns `None` for the block when the file does not open with a `---`
/// line or the block is never closed; the whole input is then the body.
#[must_use]
pub fn split(source: &str) -> (Option<&str>, &str) {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let Some(rest) = source
        .strip_prefix(FENCE)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
    else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, source)
}

/// Split and parse a document source.
///
/// # Errors
///
/// Fails like [`FrontMatter::from_yaml`]; a document without front matter
/// has no title and fails with [`SiteError::MissingTitle`].
pub fn parse_document<'a>(slug: &str, source: &'a str) -> Result<(FrontMatter, &'a str), SiteError> {
    match split(source) {
        (Some(yaml), body) => Ok((FrontMatter::from_yaml(slug, yaml)?, body)),
        (None, _) => Err(SiteError::MissingTitle(slug.to_owned())),
    }
}
