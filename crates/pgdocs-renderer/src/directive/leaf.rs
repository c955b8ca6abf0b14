//! Leaf directive trait: `::name[content]{attrs}` on its own line.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for leaf directives, self-contained blocks like void HTML elements.
///
/// Block output should be surrounded by blank lines so the markdown parser
/// treats it as an HTML block rather than part of a paragraph.
pub trait LeafDirective: Send {
    /// Name matched against `::name`.
    fn name(&self) -> &str;

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Warnings collected while processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
