//! Markdown + directives → [`CompiledContent`].
//!
//! Compilation runs in two passes: the directive processor rewrites component
//! syntax into intermediate `<pg-*>` elements, then pulldown-cmark events are
//! folded into a [`Node`] tree. Intermediate elements become
//! [`Node::Component`]s, GitHub alerts become `Note` components and headings
//! receive unique ids.

use std::collections::BTreeMap;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::compiled::CompiledContent;
use crate::components::{NoteKind, docs_processor};
use crate::element::{self, ElementTag};
use crate::node::{Align, Component, Node, TableSection};
use crate::scope::Scope;
use crate::state::{HeadingState, TocEntry};
use crate::util::{fence_lang, heading_level_to_num};

/// Compile a markdown document with component directives.
///
/// Pure: the same `(content, scope)` pair always yields the same tree, and
/// therefore byte-identical [`CompiledContent::to_json`] output.
///
/// ```
/// use pgdocs_renderer::{Scope, compile};
///
/// let scope = Scope::new().with("title", "Angular");
/// let compiled = compile("## Using :meta[title]\n\n:::note\nHi\n:::\n", &scope);
/// assert_eq!(compiled.toc[0].id, "using-angular");
/// assert_eq!(compiled.nodes.len(), 2);
/// ```
#[must_use]
pub fn compile(content: &str, scope: &Scope) -> CompiledContent {
    compile_document(content, scope, None)
}

/// Like [`compile`], with `source` (usually the slug) prefixed to warnings.
#[must_use]
pub fn compile_with_source(content: &str, scope: &Scope, source: &str) -> CompiledContent {
    compile_document(content, scope, Some(source))
}

/// Parser options: GitHub-flavored tables, strikethrough, task lists and alerts.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

fn compile_document(content: &str, scope: &Scope, source: Option<&str>) -> CompiledContent {
    let mut processor = docs_processor();
    if let Some(source) = source {
        processor = processor.with_source(source);
    }
    let markdown = processor.process(content, scope);

    let mut builder = TreeBuilder::new(source);
    for event in Parser::new_ext(&markdown, parser_options()) {
        builder.event(event);
    }
    let (nodes, toc, tree_warnings) = builder.finish();

    let mut warnings = processor.warnings();
    warnings.extend(tree_warnings);
    CompiledContent::new(nodes, toc, warnings)
}

/// An element whose children are still being collected.
enum Frame {
    Root,
    Paragraph,
    Heading(u8),
    BlockQuote,
    Alert(NoteKind),
    CodeBlock(Option<String>),
    List(Option<u64>),
    Item(Option<bool>),
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String, title: String },
    Image { url: String, title: String },
    Table(Vec<Align>),
    TableHead,
    TableRow,
    TableCell,
    Component {
        component: Component,
        attrs: BTreeMap<String, String>,
    },
    /// Unsupported wrapper; children are spliced into the parent.
    Transparent,
}

struct Open {
    frame: Frame,
    children: Vec<Node>,
}

struct TreeBuilder {
    stack: Vec<Open>,
    headings: HeadingState,
    warnings: Vec<String>,
    source: String,
}

impl TreeBuilder {
    fn new(source: Option<&str>) -> Self {
        Self {
            stack: vec![Open {
                frame: Frame::Root,
                children: Vec::new(),
            }],
            headings: HeadingState::default(),
            warnings: Vec::new(),
            source: source.unwrap_or("document").to_owned(),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push(Node::text(text.into_string())),
            Event::Code(code) => self.push(Node::InlineCode {
                value: code.into_string(),
            }),
            Event::Html(html) | Event::InlineHtml(html) => self.html(&html),
            Event::SoftBreak => self.push(Node::text("\n")),
            Event::HardBreak => self.push(Node::Break),
            Event::Rule => self.push(Node::ThematicBreak),
            Event::TaskListMarker(checked) => self.mark_task(checked),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph,
            Tag::Heading { level, .. } => Frame::Heading(heading_level_to_num(level)),
            Tag::BlockQuote(Some(kind)) => Frame::Alert(kind.into()),
            Tag::BlockQuote(None) => Frame::BlockQuote,
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => Frame::CodeBlock(fence_lang(&info)),
            Tag::CodeBlock(CodeBlockKind::Indented) => Frame::CodeBlock(None),
            Tag::List(start) => Frame::List(start),
            Tag::Item => Frame::Item(None),
            Tag::Emphasis => Frame::Emphasis,
            Tag::Strong => Frame::Strong,
            Tag::Strikethrough => Frame::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Table(alignments) => Frame::Table(alignments.into_iter().map(Align::from).collect()),
            Tag::TableHead => Frame::TableHead,
            Tag::TableRow => Frame::TableRow,
            Tag::TableCell => Frame::TableCell,
            // Intermediate elements arrive as separate `Html` events.
            Tag::HtmlBlock => return,
            Tag::FootnoteDefinition(_)
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => Frame::Transparent,
        };
        self.open(frame);
    }

    fn end(&mut self, tag: TagEnd) {
        if tag == TagEnd::HtmlBlock {
            return;
        }
        // Components opened inside this markdown element but never closed
        // there cannot outlive it.
        while let Some(Open {
            frame: Frame::Component { component, .. },
            ..
        }) = self.stack.last()
        {
            let component = *component;
            self.warn(format!(
                "{} component not closed before the end of its enclosing block",
                component.tag_name()
            ));
            self.close();
        }
        self.close();
    }

    fn html(&mut self, html: &str) {
        match element::parse(html) {
            Some(ElementTag::Open { component, attrs }) => {
                self.open(Frame::Component { component, attrs });
            }
            Some(ElementTag::Void { component, attrs }) => self.push(Node::Component {
                component,
                attrs,
                children: Vec::new(),
            }),
            Some(ElementTag::Close(component)) => {
                let closes_top = matches!(
                    self.stack.last(),
                    Some(Open {
                        frame: Frame::Component { component: open, .. },
                        ..
                    }) if *open == component
                );
                if closes_top {
                    self.close();
                } else {
                    self.warn(format!(
                        "closing {} component without a matching opening",
                        component.tag_name()
                    ));
                }
            }
            None => self.push(Node::Html {
                value: html.to_owned(),
            }),
        }
    }

    fn mark_task(&mut self, checked: bool) {
        if let Some(open) = self
            .stack
            .iter_mut()
            .rev()
            .find(|o| matches!(o.frame, Frame::Item(_)))
        {
            open.frame = Frame::Item(Some(checked));
        }
    }

    fn open(&mut self, frame: Frame) {
        self.stack.push(Open {
            frame,
            children: Vec::new(),
        });
    }

    /// Pop the innermost frame and attach the finished node to its parent.
    fn close(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(Open { frame, children }) = self.stack.pop() else {
            return;
        };
        match self.finish_frame(frame, children) {
            Finished::Node(node) => self.push(node),
            Finished::Splice(nodes) => {
                for node in nodes {
                    self.push(node);
                }
            }
        }
    }

    fn finish_frame(&mut self, frame: Frame, children: Vec<Node>) -> Finished {
        let node = match frame {
            Frame::Root | Frame::Transparent => return Finished::Splice(children),
            Frame::Paragraph => Node::Paragraph { children },
            Frame::Heading(level) => {
                let text: String = children.iter().map(Node::plain_text).collect();
                let id = self.headings.complete_heading(level, &text);
                Node::Heading {
                    level,
                    id,
                    children: trim_inline(children),
                }
            }
            Frame::BlockQuote => Node::BlockQuote { children },
            Frame::Alert(kind) => Node::Component {
                component: Component::Note,
                attrs: BTreeMap::from([("kind".to_owned(), kind.as_str().to_owned())]),
                children,
            },
            Frame::CodeBlock(lang) => Node::Code {
                lang,
                value: children.iter().map(Node::plain_text).collect(),
            },
            Frame::List(start) => Node::List { start, children },
            Frame::Item(checked) => Node::ListItem { checked, children },
            Frame::Emphasis => Node::Emphasis { children },
            Frame::Strong => Node::Strong { children },
            Frame::Strikethrough => Node::Strikethrough { children },
            Frame::Link { url, title } => Node::Link {
                url,
                title,
                children,
            },
            Frame::Image { url, title } => Node::Image {
                url,
                title,
                alt: children.iter().map(Node::plain_text).collect(),
            },
            Frame::Table(_) => Node::Table {
                children: table_sections(children),
            },
            Frame::TableHead => {
                let mut cells = children;
                self.align_cells(&mut cells, true);
                Node::TableSection {
                    section: TableSection::Head,
                    children: vec![Node::TableRow { children: cells }],
                }
            }
            Frame::TableRow => {
                let mut cells = children;
                self.align_cells(&mut cells, false);
                Node::TableRow { children: cells }
            }
            Frame::TableCell => Node::TableCell {
                header: false,
                align: Align::None,
                children,
            },
            Frame::Component { component, attrs } => Node::Component {
                component,
                attrs,
                children,
            },
        };
        Finished::Node(node)
    }

    /// Apply the enclosing table's column alignment to a row of cells.
    fn align_cells(&self, cells: &mut [Node], is_header: bool) {
        let aligns = self
            .stack
            .iter()
            .rev()
            .find_map(|o| match &o.frame {
                Frame::Table(aligns) => Some(aligns.as_slice()),
                _ => None,
            })
            .unwrap_or_default();

        for (i, cell) in cells.iter_mut().enumerate() {
            if let Node::TableCell { header, align, .. } = cell {
                *header = is_header;
                *align = aligns.get(i).copied().unwrap_or_default();
            }
        }
    }

    /// Append to the innermost frame, merging adjacent text and raw HTML.
    fn push(&mut self, node: Node) {
        let Some(open) = self.stack.last_mut() else {
            return;
        };
        match (open.children.last_mut(), node) {
            (Some(Node::Text { value: prev }), Node::Text { value }) => prev.push_str(&value),
            (Some(Node::Html { value: prev }), Node::Html { value }) => prev.push_str(&value),
            (_, node) => open.children.push(node),
        }
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(format!("{}: {message}", self.source));
    }

    fn finish(mut self) -> (Vec<Node>, Vec<TocEntry>, Vec<String>) {
        while self.stack.len() > 1 {
            if let Some(Open {
                frame: Frame::Component { component, .. },
                ..
            }) = self.stack.last()
            {
                let component = *component;
                self.warn(format!("unclosed {} component", component.tag_name()));
            }
            self.close();
        }
        let nodes = self
            .stack
            .pop()
            .map(|root| root.children)
            .unwrap_or_default();
        (nodes, self.headings.take_toc(), self.warnings)
    }
}

enum Finished {
    Node(Node),
    Splice(Vec<Node>),
}

/// Group a table's rows: the head section first, then body rows in one section.
fn table_sections(children: Vec<Node>) -> Vec<Node> {
    let mut sections = Vec::new();
    let mut body = Vec::new();
    for child in children {
        match child {
            Node::TableSection { .. } => sections.push(child),
            other => body.push(other),
        }
    }
    if !body.is_empty() {
        sections.push(Node::TableSection {
            section: TableSection::Body,
            children: body,
        });
    }
    sections
}

/// Trim leading and trailing whitespace of a heading's inline content.
fn trim_inline(mut children: Vec<Node>) -> Vec<Node> {
    if let Some(Node::Text { value }) = children.first_mut() {
        *value = value.trim_start().to_owned();
    }
    if let Some(Node::Text { value }) = children.last_mut() {
        *value = value.trim_end().to_owned();
    }
    children.retain(|n| !matches!(n, Node::Text { value } if value.is_empty()));
    children
}
