//! `:::note[Title]{type=".."}`: callout box.

use std::fmt;

use pulldown_cmark::BlockQuoteKind;

use crate::directive::{ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput};
use crate::element;
use crate::node::Component;

use super::block;

/// Callout flavor of a `Note`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoteKind {
    #[default]
    Info,
    Tip,
    Warning,
    Danger,
}

impl NoteKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Tip => "tip",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "tip" => Some(Self::Tip),
            "warning" => Some(Self::Warning),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GitHub alerts (`> [!WARNING]`) fold into the four note kinds.
impl From<BlockQuoteKind> for NoteKind {
    fn from(kind: BlockQuoteKind) -> Self {
        match kind {
            BlockQuoteKind::Note | BlockQuoteKind::Important => Self::Info,
            BlockQuoteKind::Tip => Self::Tip,
            BlockQuoteKind::Warning => Self::Warning,
            BlockQuoteKind::Caution => Self::Danger,
        }
    }
}

#[derive(Default)]
pub struct NoteDirective {
    warnings: Vec<String>,
}

impl ContainerDirective for NoteDirective {
    fn name(&self) -> &'static str {
        "note"
    }

    fn start(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let kind = match args.get_non_empty("type") {
            None => NoteKind::Info,
            Some(raw) => NoteKind::parse(raw).unwrap_or_else(|| {
                self.warnings.push(format!(
                    "{}: unknown note type {raw:?}, using info",
                    ctx.location()
                ));
                NoteKind::Info
            }),
        };

        let title = args.content.trim();
        let mut attrs = vec![("kind", kind.as_str())];
        if !title.is_empty() {
            attrs.push(("title", title));
        }
        DirectiveOutput::html(block(&element::open(Component::Note, &attrs)))
    }

    fn end(&mut self, _line: usize) -> Option<String> {
        Some(block(&element::close(Component::Note)))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
