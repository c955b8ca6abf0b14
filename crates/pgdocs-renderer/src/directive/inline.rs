//! Inline directive trait: `:name[content]{attrs}`.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for inline directives, which sit inside running text.
///
/// Handlers are `Send` but not `Sync`: each compile builds its own processor.
///
/// ```
/// use pgdocs_renderer::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective};
///
/// struct Kbd;
///
/// impl InlineDirective for Kbd {
///     fn name(&self) -> &str { "kbd" }
///
///     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
///     }
/// }
/// ```
pub trait InlineDirective: Send {
    /// Name matched against `:name`.
    fn name(&self) -> &str;

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Warnings collected while processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
