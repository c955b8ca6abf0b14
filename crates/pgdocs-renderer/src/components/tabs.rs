//! `:::tabs` / `:::tab[Label]`: tabbed panels.

use crate::directive::{ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput};
use crate::element;
use crate::node::Component;
use crate::util::strip_quotes;

use super::block;

/// Tab group wrapper.
pub struct TabsDirective;

impl ContainerDirective for TabsDirective {
    fn name(&self) -> &'static str {
        "tabs"
    }

    fn start(&mut self, _args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        DirectiveOutput::html(block(&element::open(Component::Tabs, &[])))
    }

    fn end(&mut self, _line: usize) -> Option<String> {
        Some(block(&element::close(Component::Tabs)))
    }
}

/// A single panel; `[Label]` becomes the tab button text.
pub struct TabDirective;

impl ContainerDirective for TabDirective {
    fn name(&self) -> &'static str {
        "tab"
    }

    fn start(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
        let label = strip_quotes(args.content.trim());
        let label = if label.is_empty() { "Tab" } else { label };
        DirectiveOutput::html(block(&element::open(Component::Tab, &[("label", label)])))
    }

    fn end(&mut self, _line: usize) -> Option<String> {
        Some(block(&element::close(Component::Tab)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Scope;
    use crate::directive::DirectiveProcessor;

    #[test]
    fn test_tab_group() {
        let mut processor = DirectiveProcessor::new()
            .with_container(TabsDirective)
            .with_container(TabDirective);
        let input = "::::tabs\n:::tab[\"npm\"]\nnpm i\n:::\n:::tab\nyarn add\n:::\n::::";
        let out = processor.process(input, &Scope::new());
        assert_eq!(
            out,
            "\n<pg-tabs>\n\n\n<pg-tab label=\"npm\">\n\nnpm i\n\n</pg-tab>\n\n\n<pg-tab label=\"Tab\">\n\nyarn add\n\n</pg-tab>\n\n\n</pg-tabs>\n"
        );
        assert!(processor.warnings().is_empty());
    }
}
