//! Directive argument parsing.
//!
//! Parses the `[label]{#id .class key="value"}` part of a directive.

use std::collections::BTreeMap;

/// Parsed arguments from directive syntax.
///
/// ```
/// use pgdocs_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("Download", r#"href="/downloads" .wide icon='mdi:download'"#);
/// assert_eq!(args.content, "Download");
/// assert_eq!(args.get("href"), Some("/downloads"));
/// assert_eq!(args.get("icon"), Some("mdi:download"));
/// assert_eq!(args.classes, vec!["wide"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Text inside `[...]`, empty when absent.
    pub content: String,
    /// `{#id}`.
    pub id: Option<String>,
    /// `{.class}` entries in source order.
    pub classes: Vec<String>,
    /// `{key="value"}` entries.
    pub attrs: BTreeMap<String, String>,
}

impl DirectiveArgs {
    /// Parse bracket content and the attribute string found between braces.
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        let mut rest = attrs_str.trim();
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('#') {
                let (id, tail) = split_shorthand(after);
                args.id = Some(id.to_owned());
                rest = tail;
            } else if let Some(after) = rest.strip_prefix('.') {
                let (class, tail) = split_shorthand(after);
                if !class.is_empty() {
                    args.classes.push(class.to_owned());
                }
                rest = tail;
            } else if let Some((key, value, tail)) = parse_key_value(rest) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                rest = tail;
            } else {
                let skip = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[skip..];
            }
            rest = rest.trim_start();
        }

        args
    }

    /// Attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Attribute value by key, ignoring blank values.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Rebuild `[content]{attrs}` for directives that pass through unhandled.
    #[must_use]
    pub fn to_syntax(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(id) = &self.id {
            parts.push(format!("#{id}"));
        }
        parts.extend(self.classes.iter().map(|c| format!(".{c}")));
        parts.extend(
            self.attrs
                .iter()
                .map(|(k, v)| format!(r#"{k}="{}""#, v.replace('"', "&quot;"))),
        );

        let mut out = String::new();
        if !self.content.is_empty() {
            out.push('[');
            out.push_str(&self.content);
            out.push(']');
        }
        if !parts.is_empty() {
            out.push('{');
            out.push_str(&parts.join(" "));
            out.push('}');
        }
        out
    }
}

/// Split `#id`/`.class` shorthand from the remaining attribute text.
fn split_shorthand(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    (&s[..end], &s[end..])
}

/// Parse `key="value"`, `key='value'`, or `key=value`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq = s.find('=')?;
    let key = s[..eq].trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after = &s[eq + 1..];
    for quote in ['"', '\''] {
        if let Some(inner) = after.strip_prefix(quote) {
            let close = inner.find(quote)?;
            return Some((key, &inner[..close], &inner[close + 1..]));
        }
    }

    let end = after.find(char::is_whitespace).unwrap_or(after.len());
    Some((key, &after[..end], &after[end..]))
}
