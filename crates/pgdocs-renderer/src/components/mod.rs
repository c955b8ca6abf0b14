//! Built-in directive handlers for docs components.

mod button;
mod contributors;
mod icon;
mod meta;
mod note;
mod tabs;

pub use button::ButtonDirective;
pub use contributors::ContributorsDirective;
pub use icon::IconDirective;
pub use meta::MetaDirective;
pub use note::{NoteDirective, NoteKind};
pub use tabs::{TabDirective, TabsDirective};

use crate::directive::DirectiveProcessor;

/// Processor with every built-in component registered.
#[must_use]
pub fn docs_processor() -> DirectiveProcessor {
    DirectiveProcessor::new()
        .with_inline(MetaDirective::default())
        .with_inline(IconDirective::default())
        .with_leaf(ButtonDirective::default())
        .with_leaf(ContributorsDirective)
        .with_container(NoteDirective::default())
        .with_container(TabsDirective)
        .with_container(TabDirective)
}

/// Surround block-level output with blank lines so it parses as an HTML block.
pub(crate) fn block(html: &str) -> String {
    format!("\n{html}\n")
}
