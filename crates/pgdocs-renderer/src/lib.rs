//! Docs content compiler and trait-based renderer.
//!
//! Compilation and rendering are separate steps:
//!
//! 1. [`compile`] turns markdown with component directives into a
//!    [`CompiledContent`]: a serializable [`Node`] tree plus the outline.
//!    It is pure, so its output can be cached.
//! 2. [`MarkdownRenderer`] walks that tree and maps each element to output
//!    through a [`RenderBackend`]. [`HtmlBackend`] is the docs component set.
//!
//! # Example
//!
//! ```
//! use pgdocs_renderer::{HtmlBackend, MarkdownRenderer, Scope, compile};
//!
//! let scope = Scope::new().with("title", "React");
//! let compiled = compile(
//!     "# :meta[title]\n\n:::note{type=\"tip\"}\nUse `@mdi/react`.\n:::\n",
//!     &scope,
//! );
//! assert_eq!(compiled.toc[0].title, "React");
//!
//! let result = MarkdownRenderer::<HtmlBackend>::new().render(compiled);
//! assert!(result.html.contains(r#"<div class="note note-tip">"#));
//! ```

mod backend;
mod compiled;
mod compiler;
mod components;
pub mod directive;
mod element;
mod html;
mod icons;
mod node;
mod renderer;
mod scope;
mod state;
mod util;

pub use backend::{ButtonProps, RenderBackend};
pub use compiled::{CompiledContent, DecodeError, FORMAT_VERSION};
pub use compiler::{compile, compile_with_source, parser_options};
pub use components::{
    ButtonDirective, ContributorsDirective, IconDirective, MetaDirective, NoteDirective, NoteKind,
    TabDirective, TabsDirective, docs_processor,
};
pub use html::HtmlBackend;
pub use icons::{DEFAULT_LIBRARY, IconLibraries, IconRef};
pub use node::{Align, Component, Node, TableSection};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use scope::Scope;
pub use state::{TocEntry, escape_html, slugify};

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CompiledContent: Send, Sync, Clone);
    assert_impl_all!(IconLibraries: Send, Sync);
    assert_impl_all!(Scope: Send, Sync);
}
