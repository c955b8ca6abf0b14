//! Values visible to `:meta[...]` expressions while compiling a document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered map from front-matter key to value.
///
/// Ordered so that anything derived from a scope is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(BTreeMap<String, Value>);

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by dotted path (`"title"`, `"author.name"`, `"tags.0"`).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Display text for a value: strings verbatim, numbers and booleans
    /// formatted, arrays of scalars joined with `", "`.
    ///
    /// Returns `None` for missing keys, `null`, and objects.
    #[must_use]
    pub fn get_text(&self, path: &str) -> Option<String> {
        value_text(self.get(path)?)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) => None,
                    other => value_text(other),
                })
                .collect();
            parts.map(|p| p.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

impl FromIterator<(String, Value)> for Scope {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Scope {
        Scope::new()
            .with("title", "Angular")
            .with("hidden", false)
            .with("version", 7)
            .with("author", json!({ "name": "Austin", "links": ["gh", "tw"] }))
            .with("tags", json!(["svg", "font"]))
    }

    #[test]
    fn test_get_top_level() {
        assert_eq!(sample().get("title"), Some(&json!("Angular")));
        assert_eq!(sample().get("missing"), None);
    }

    #[test]
    fn test_get_dotted_path() {
        let scope = sample();
        assert_eq!(scope.get("author.name"), Some(&json!("Austin")));
        assert_eq!(scope.get("author.links.1"), Some(&json!("tw")));
        assert_eq!(scope.get("author.links.9"), None);
        assert_eq!(scope.get("title.length"), None);
    }

    #[test]
    fn test_get_text() {
        let scope = sample();
        assert_eq!(scope.get_text("title").as_deref(), Some("Angular"));
        assert_eq!(scope.get_text("hidden").as_deref(), Some("false"));
        assert_eq!(scope.get_text("version").as_deref(), Some("7"));
        assert_eq!(scope.get_text("tags").as_deref(), Some("svg, font"));
        assert_eq!(scope.get_text("author"), None);
    }

    #[test]
    fn test_serializes_in_key_order() {
        let scope = Scope::new().with("b", 1).with("a", 2);
        assert_eq!(serde_json::to_string(&scope).unwrap(), r#"{"a":2,"b":1}"#);
    }
}
