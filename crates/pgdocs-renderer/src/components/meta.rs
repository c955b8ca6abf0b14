//! `:meta[key]`: front-matter value substitution.

use crate::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective};

/// Replaces `:meta[key]` with the scope value at `key` as literal text.
///
/// Unknown keys are left in place and reported.
#[derive(Default)]
pub struct MetaDirective {
    warnings: Vec<String>,
}

impl InlineDirective for MetaDirective {
    fn name(&self) -> &'static str {
        "meta"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let key = args.content.trim();
        if let Some(text) = ctx.scope.get_text(key) {
            return DirectiveOutput::text(text);
        }
        self.warnings.push(format!(
            "{}: :meta[{key}] has no value in front matter",
            ctx.location()
        ));
        DirectiveOutput::Skip
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Scope;
    use crate::directive::DirectiveProcessor;

    #[test]
    fn test_substitutes_nested_values() {
        let scope = Scope::new()
            .with("title", "Angular")
            .with("package", json!({ "name": "@mdi/angular", "tags": ["a", "b"] }));
        let mut processor = DirectiveProcessor::new().with_inline(MetaDirective::default());

        let out = processor.process(
            "Install :meta[package.name] for :meta[title] (:meta[package.tags]).",
            &scope,
        );
        assert_eq!(out, r"Install \@mdi\/angular for Angular (a\, b).");
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_missing_key_is_kept_and_reported() {
        let mut processor = DirectiveProcessor::new()
            .with_source("guides/start")
            .with_inline(MetaDirective::default());

        let out = processor.process("Hi\nBy :meta[author]", &Scope::new());
        assert_eq!(out, "Hi\nBy :meta[author]");
        assert_eq!(
            processor.warnings(),
            vec!["guides/start:2: :meta[author] has no value in front matter"]
        );
    }
}
