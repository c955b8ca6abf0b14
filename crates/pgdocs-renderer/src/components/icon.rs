//! `:icon[lib:name]{title=".."}`: inline icon.

use crate::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective};
use crate::element;
use crate::icons::IconRef;
use crate::node::Component;

#[derive(Default)]
pub struct IconDirective {
    warnings: Vec<String>,
}

impl InlineDirective for IconDirective {
    fn name(&self) -> &'static str {
        "icon"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let Some(icon) = IconRef::parse(&args.content) else {
            self.warnings.push(format!(
                "{}: invalid icon reference {:?}",
                ctx.location(),
                args.content
            ));
            return DirectiveOutput::Skip;
        };

        let reference = icon.to_string();
        let mut attrs = vec![("ref", reference.as_str())];
        if let Some(title) = args.get_non_empty("title") {
            attrs.push(("title", title));
        }
        DirectiveOutput::html(element::void(Component::Icon, &attrs))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scope;
    use crate::directive::DirectiveProcessor;

    fn run(input: &str) -> (String, Vec<String>) {
        let mut processor = DirectiveProcessor::new().with_inline(IconDirective::default());
        let out = processor.process(input, &Scope::new());
        (out, processor.warnings())
    }

    #[test]
    fn test_icon_with_title() {
        let (out, warnings) = run(r#"Click :icon[mdi:cog]{title="Settings"} to open."#);
        assert_eq!(
            out,
            r#"Click <pg-icon ref="mdi:cog" title="Settings" /> to open."#
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bare_name_uses_default_library() {
        let (out, _) = run(":icon[home]");
        assert_eq!(out, r#"<pg-icon ref="mdi:home" />"#);
    }

    #[test]
    fn test_invalid_reference_is_kept() {
        let (out, warnings) = run(":icon[Not An Icon]");
        assert_eq!(out, ":icon[Not An Icon]");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("invalid icon reference"));
    }
}
