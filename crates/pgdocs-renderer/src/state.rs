//! Heading ids, table of contents and HTML escaping.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID, equal to the rendered heading's `id` attribute.
    pub id: String,
}

/// Assigns unique heading ids in document order and records the outline.
#[derive(Debug, Default)]
pub(crate) struct HeadingState {
    toc: Vec<TocEntry>,
    id_counts: BTreeMap<String, usize>,
    used: BTreeSet<String>,
}

impl HeadingState {
    /// Register a heading and return its id.
    ///
    /// Repeated titles get `-1`, `-2`, ... suffixes.
    pub(crate) fn complete_heading(&mut self, level: u8, text: &str) -> String {
        let title = text.trim();
        let mut base = slugify(title);
        if base.is_empty() {
            base.push_str("section");
        }

        let count = self.id_counts.entry(base.clone()).or_default();
        let mut id = match *count {
            0 => base.clone(),
            n => format!("{base}-{n}"),
        };
        // A literal "Usage 1" heading may already own "usage-1".
        while self.used.contains(&id) {
            *count += 1;
            id = format!("{base}-{count}");
        }
        *count += 1;
        self.used.insert(id.clone());

        self.toc.push(TocEntry {
            level,
            title: title.to_owned(),
            id: id.clone(),
        });
        id
    }

    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert text to URL-safe slug.
///
/// Lowercases ASCII alphanumerics, collapses whitespace, dashes and
/// underscores into single dashes, and drops everything else.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }
    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  @mdi/js -- Usage  "), "mdijs-usage");
        assert_eq!(slugify("snake_case"), "snake-case");
        assert_eq!(slugify("🎉"), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_duplicate_headings_get_suffixes() {
        let mut state = HeadingState::default();
        assert_eq!(state.complete_heading(2, "Usage"), "usage");
        assert_eq!(state.complete_heading(3, "Usage"), "usage-1");
        assert_eq!(state.complete_heading(2, " Usage "), "usage-2");

        let toc = state.take_toc();
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[2].title, "Usage");
        assert_eq!(toc[1].level, 3);
    }

    #[test]
    fn test_literal_suffix_does_not_collide() {
        let mut state = HeadingState::default();
        assert_eq!(state.complete_heading(2, "Step 1"), "step-1");
        assert_eq!(state.complete_heading(2, "Step"), "step");
        assert_eq!(state.complete_heading(2, "Step"), "step-2");
    }

    #[test]
    fn test_symbol_only_heading_gets_fallback_id() {
        let mut state = HeadingState::default();
        assert_eq!(state.complete_heading(2, "🎉"), "section");
        assert_eq!(state.complete_heading(2, "!!"), "section-1");
    }
}
