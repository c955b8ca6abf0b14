//! `::button[Label]{href=".." icon="lib:name" variant=".."}`: link button.

use crate::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective};
use crate::element;
use crate::icons::IconRef;
use crate::node::Component;

use super::block;

/// Button variants the docs stylesheet knows about.
const VARIANTS: [&str; 2] = ["contained", "outlined"];

#[derive(Default)]
pub struct ButtonDirective {
    warnings: Vec<String>,
}

impl ButtonDirective {
    fn warn(&mut self, ctx: &DirectiveContext, message: &str) {
        self.warnings
            .push(format!("{}: ::button {message}", ctx.location()));
    }
}

impl LeafDirective for ButtonDirective {
    fn name(&self) -> &'static str {
        "button"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let Some(href) = args.get_non_empty("href") else {
            self.warn(ctx, "requires an href");
            return DirectiveOutput::Skip;
        };

        let icon = match args.get_non_empty("icon") {
            Some(raw) => {
                let parsed = IconRef::parse(raw).map(|icon| icon.to_string());
                if parsed.is_none() {
                    self.warn(ctx, &format!("has invalid icon reference {raw:?}"));
                }
                parsed
            }
            None => None,
        };

        let label = args.content.trim();
        let mut attrs = vec![("href", href)];
        if !label.is_empty() {
            attrs.push(("label", label));
        }
        if let Some(icon) = &icon {
            attrs.push(("icon", icon.as_str()));
        }

        match args.get_non_empty("variant") {
            Some(variant) if VARIANTS.contains(&variant) => attrs.push(("variant", variant)),
            Some(variant) => self.warn(ctx, &format!("has unknown variant {variant:?}")),
            None => {}
        }

        DirectiveOutput::html(block(&element::void(Component::Button, &attrs)))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Scope;
    use crate::directive::DirectiveProcessor;

    fn run(input: &str) -> (String, Vec<String>) {
        let mut processor = DirectiveProcessor::new().with_leaf(ButtonDirective::default());
        let out = processor.process(input, &Scope::new());
        (out, processor.warnings())
    }

    #[test]
    fn test_full_button() {
        let (out, warnings) =
            run(r#"::button[View on GitHub]{href="https://github.com/Templarian/MaterialDesign" icon="mdi:github" variant="outlined"}"#);
        assert_eq!(
            out,
            "\n<pg-button href=\"https://github.com/Templarian/MaterialDesign\" label=\"View on GitHub\" icon=\"mdi:github\" variant=\"outlined\" />\n"
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_href_passes_through() {
        let (out, warnings) = run("::button[Download]{}");
        assert_eq!(out, "::button[Download]{}");
        assert_eq!(warnings, vec!["line 1: ::button requires an href"]);
    }

    #[test]
    fn test_bad_icon_and_variant_are_dropped() {
        let (out, warnings) = run(r#"::button[Go]{href="/go" icon="Bad Icon" variant="huge"}"#);
        assert_eq!(out, "\n<pg-button href=\"/go\" label=\"Go\" />\n");
        assert_eq!(warnings.len(), 2);
    }
}
