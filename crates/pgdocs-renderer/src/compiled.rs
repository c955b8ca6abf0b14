//! Serializable compile output.

use serde::{Deserialize, Serialize};

use crate::icons::IconRef;
use crate::node::{Component, Node};
use crate::state::TocEntry;

/// Version stamped into serialized [`CompiledContent`].
///
/// Bump when the [`Node`] shape changes so stale caches are rejected.
pub const FORMAT_VERSION: u32 = 1;

/// Error decoding serialized compiled content.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid compiled content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported compiled content version {found} (expected {FORMAT_VERSION})")]
    Version { found: u32 },
}

/// A document compiled to a render-ready tree.
///
/// Produced by [`compile`](crate::compile), consumed by
/// [`MarkdownRenderer`](crate::MarkdownRenderer). Plain data, safe to cache.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompiledContent {
    pub version: u32,
    pub nodes: Vec<Node>,
    /// Every heading in document order, all levels.
    pub toc: Vec<TocEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CompiledContent {
    #[must_use]
    pub fn new(nodes: Vec<Node>, toc: Vec<TocEntry>, warnings: Vec<String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            nodes,
            toc,
            warnings,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON, rejecting other format versions.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let content: Self = serde_json::from_str(json)?;
        if content.version != FORMAT_VERSION {
            return Err(DecodeError::Version {
                found: content.version,
            });
        }
        Ok(content)
    }

    /// Icons referenced by `Icon` and `Button` components, sorted and deduplicated.
    #[must_use]
    pub fn icon_refs(&self) -> Vec<IconRef> {
        let mut refs = Vec::new();
        for node in &self.nodes {
            node.walk(&mut |n| {
                let Node::Component {
                    component, attrs, ..
                } = n
                else {
                    return;
                };
                let key = match component {
                    Component::Icon => "ref",
                    Component::Button => "icon",
                    _ => return,
                };
                if let Some(icon) = attrs.get(key).and_then(|v| IconRef::parse(v)) {
                    refs.push(icon);
                }
            });
        }
        refs.sort();
        refs.dedup();
        refs
    }

    /// Plain text of the whole document, blocks separated by newlines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&node.plain_text());
        }
        out
    }
}
