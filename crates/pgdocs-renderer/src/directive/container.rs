//! Container directive trait: `:::name` ... `:::`.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for container directives, which wrap arbitrary markdown.
///
/// The processor calls [`end`](Self::end) exactly once for every
/// [`start`](Self::start) that did not return [`DirectiveOutput::Skip`],
/// innermost first. Handlers that nest keep their own stack.
pub trait ContainerDirective: Send {
    /// Name matched against `:::name`.
    fn name(&self) -> &str;

    /// Handle `:::name[content]{attrs}`.
    fn start(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Handle the matching `:::`. `None` emits nothing.
    fn end(&mut self, line: usize) -> Option<String>;

    /// Warnings collected while processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
