//! Per-directive context handed to handlers.

use crate::scope::Scope;

/// Where a directive appears and what values it may reference.
///
/// ```
/// use pgdocs_renderer::Scope;
/// use pgdocs_renderer::directive::DirectiveContext;
///
/// let scope = Scope::new().with("title", "Angular");
/// let ctx = DirectiveContext { source: Some("mdi/angular"), line: 3, scope: &scope };
/// assert_eq!(ctx.location(), "mdi/angular:3");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DirectiveContext<'a> {
    /// Document identifier used in warnings (usually the slug).
    pub source: Option<&'a str>,
    /// Line number where the directive appears (1-indexed).
    pub line: usize,
    /// Front-matter values visible to expressions.
    pub scope: &'a Scope,
}

impl DirectiveContext<'_> {
    /// `source:line`, or `line N` when the source is unknown.
    #[must_use]
    pub fn location(&self) -> String {
        match self.source {
            Some(source) => format!("{source}:{}", self.line),
            None => format!("line {}", self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_without_source() {
        let scope = Scope::new();
        let ctx = DirectiveContext {
            source: None,
            line: 12,
            scope: &scope,
        };
        assert_eq!(ctx.location(), "line 12");
    }
}
