//! Component directives in markdown source.
//!
//! Three forms are recognized, each dispatched to a registered handler:
//!
//! - **Inline** ([`InlineDirective`]): `:name[content]{attrs}` inside text
//! - **Leaf** ([`LeafDirective`]): `::name[content]{attrs}` on its own line
//! - **Container** ([`ContainerDirective`]): `:::name[content]{attrs}` ... `:::`
//!
//! [`DirectiveProcessor`] rewrites the source line by line before markdown
//! parsing. Handlers return intermediate HTML (`<pg-*>` elements, which the
//! compiler later turns into component nodes) or literal text.

mod args;
mod container;
mod context;
mod fence;
mod inline;
mod leaf;
mod output;
mod parser;
mod processor;

pub use args::DirectiveArgs;
pub use container::ContainerDirective;
pub use context::DirectiveContext;
pub use inline::InlineDirective;
pub use leaf::LeafDirective;
pub use output::DirectiveOutput;
pub use processor::DirectiveProcessor;
