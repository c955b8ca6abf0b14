//! Directive output variants.

/// What a handler produces for a directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// Raw HTML (usually an intermediate `<pg-*>` element) that passes
    /// through the markdown parser unchanged.
    Html(String),
    /// Literal text. Markdown punctuation is escaped so the value renders
    /// verbatim.
    Text(String),
    /// Leave the directive source in place.
    Skip,
}

impl DirectiveOutput {
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }

    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Markdown source to splice into the line, or `None` for [`Skip`](Self::Skip).
    pub(crate) fn into_markdown(self) -> Option<String> {
        match self {
            Self::Html(html) => Some(html),
            Self::Text(text) => Some(escape_markdown(&text)),
            Self::Skip => None,
        }
    }
}

/// Backslash-escape ASCII punctuation so the text is not read as markup.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if c.is_ascii_punctuation() {
            out.push('\\');
        }
        if c == '\n' {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}
