//! Generic tree renderer with pluggable backend.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::marker::PhantomData;

use crate::backend::{ButtonProps, RenderBackend};
use crate::compiled::CompiledContent;
use crate::components::NoteKind;
use crate::icons::{IconLibraries, IconRef};
use crate::node::{Component, Node};
use crate::state::{TocEntry, escape_html};

/// Result of rendering compiled content.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered body HTML.
    pub html: String,
    /// Table of contents entries carried over from compilation.
    pub toc: Vec<TocEntry>,
    /// Compile warnings followed by render warnings (e.g. missing icons).
    pub warnings: Vec<String>,
}

/// Renders a [`CompiledContent`] tree through a [`RenderBackend`].
///
/// Markdown elements common to every output (paragraphs, lists, emphasis,
/// links) are written here; everything in the docs vocabulary goes through
/// the backend.
///
/// ```
/// use pgdocs_renderer::{HtmlBackend, MarkdownRenderer, Scope, compile};
///
/// let compiled = compile("## Hello\n\n**Bold** text", &Scope::new());
/// let result = MarkdownRenderer::<HtmlBackend>::new().render(compiled);
/// assert_eq!(
///     result.html,
///     r#"<h2 id="hello">Hello</h2><p><strong>Bold</strong> text</p>"#
/// );
/// ```
pub struct MarkdownRenderer<B: RenderBackend> {
    output: String,
    icons: IconLibraries,
    base_path: Option<String>,
    source: String,
    next_tabs_id: usize,
    warnings: Vec<String>,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            icons: IconLibraries::new(),
            base_path: None,
            source: "document".to_owned(),
            next_tabs_id: 0,
            warnings: Vec::new(),
            _backend: PhantomData,
        }
    }

    /// Icons available to `Icon` and `Button` components.
    #[must_use]
    pub fn with_icons(mut self, icons: IconLibraries) -> Self {
        self.icons = icons;
        self
    }

    /// Set base path for resolving relative `.md` links.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Name prefixed to render warnings, matching
    /// [`compile_with_source`](crate::compile_with_source).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Render the tree, consuming both the content and the renderer.
    pub fn render(mut self, content: CompiledContent) -> RenderResult {
        let CompiledContent {
            nodes,
            toc,
            mut warnings,
            ..
        } = content;

        let mut out = std::mem::take(&mut self.output);
        self.render_nodes(&nodes, &mut out);

        warnings.append(&mut self.warnings);
        RenderResult {
            html: out,
            toc,
            warnings,
        }
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(format!("{}: {message}", self.source));
    }

    fn render_nodes(&mut self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.render_node(node, out);
        }
    }

    /// Render children into a fresh buffer, for backends that need them whole.
    fn render_to_string(&mut self, nodes: &[Node]) -> String {
        let mut buf = String::new();
        self.render_nodes(nodes, &mut buf);
        buf
    }

    fn render_node(&mut self, node: &Node, out: &mut String) {
        match node {
            Node::Text { value } => out.push_str(&escape_html(value)),
            Node::Heading {
                level,
                id,
                children,
            } => {
                let inner = self.render_to_string(children);
                B::heading(*level, id, &inner, out);
            }
            Node::Paragraph { children } => self.wrap("p", children, out),
            Node::Emphasis { children } => self.wrap("em", children, out),
            Node::Strong { children } => self.wrap("strong", children, out),
            Node::Strikethrough { children } => self.wrap("s", children, out),
            Node::InlineCode { value } => B::inline_code(value, out),
            Node::Code { lang, value } => B::code_block(lang.as_deref(), value, out),
            Node::Link {
                url,
                title,
                children,
            } => {
                let href = B::transform_link(url, self.base_path.as_deref());
                let _ = write!(out, r#"<a href="{}""#, escape_html(&href));
                if !title.is_empty() {
                    let _ = write!(out, r#" title="{}""#, escape_html(title));
                }
                out.push('>');
                self.render_nodes(children, out);
                out.push_str("</a>");
            }
            Node::Image { url, title, alt } => B::image(url, alt, title, out),
            Node::List { start, children } => {
                match start {
                    None => out.push_str("<ul>"),
                    Some(1) => out.push_str("<ol>"),
                    Some(n) => {
                        let _ = write!(out, r#"<ol start="{n}">"#);
                    }
                }
                self.render_nodes(children, out);
                out.push_str(if start.is_some() { "</ol>" } else { "</ul>" });
            }
            Node::ListItem { checked, children } => {
                out.push_str("<li>");
                if let Some(checked) = checked {
                    B::task_list_marker(*checked, out);
                }
                self.render_nodes(children, out);
                out.push_str("</li>");
            }
            Node::BlockQuote { children } => {
                B::blockquote_start(out);
                self.render_nodes(children, out);
                B::blockquote_end(out);
            }
            Node::Table { children } => {
                B::table_start(out);
                self.render_nodes(children, out);
                B::table_end(out);
            }
            Node::TableSection { section, children } => {
                B::table_section_start(*section, out);
                self.render_nodes(children, out);
                B::table_section_end(*section, out);
            }
            Node::TableRow { children } => {
                B::table_row_start(out);
                self.render_nodes(children, out);
                B::table_row_end(out);
            }
            Node::TableCell {
                header,
                align,
                children,
            } => {
                B::table_cell_start(*header, *align, out);
                self.render_nodes(children, out);
                B::table_cell_end(*header, out);
            }
            Node::ThematicBreak => B::horizontal_rule(out),
            Node::Break => B::hard_break(out),
            Node::Html { value } => out.push_str(value),
            Node::Component {
                component,
                attrs,
                children,
            } => self.render_component(*component, attrs, children, out),
        }
    }

    fn wrap(&mut self, tag: &str, children: &[Node], out: &mut String) {
        let _ = write!(out, "<{tag}>");
        self.render_nodes(children, out);
        let _ = write!(out, "</{tag}>");
    }

    fn render_component(
        &mut self,
        component: Component,
        attrs: &BTreeMap<String, String>,
        children: &[Node],
        out: &mut String,
    ) {
        let attr = |key: &str| attrs.get(key).map(String::as_str).filter(|v| !v.is_empty());

        match component {
            Component::Note => {
                let kind = attr("kind").and_then(NoteKind::parse).unwrap_or_default();
                B::note_start(kind, attr("title"), out);
                self.render_nodes(children, out);
                B::note_end(kind, out);
            }
            Component::Tabs => self.render_tabs(children, out),
            Component::Tab => {
                self.warn("tab component outside a tabs group rendered on its own");
                let group = Node::Component {
                    component,
                    attrs: attrs.clone(),
                    children: children.to_vec(),
                };
                self.render_tabs(std::slice::from_ref(&group), out);
            }
            Component::Button => {
                let props = ButtonProps {
                    href: attr("href").unwrap_or("#"),
                    label: attr("label").unwrap_or_default(),
                    variant: attr("variant"),
                };
                let icon = attr("icon").and_then(IconRef::parse);
                let resolved = icon.as_ref().and_then(|icon| self.resolve_icon(icon));
                B::button(&props, icon.as_ref().zip(resolved.as_deref()), out);
            }
            Component::Icon => match attr("ref").and_then(IconRef::parse) {
                Some(icon) => {
                    let path = self.resolve_icon(&icon);
                    B::icon(&icon, path.as_deref(), attr("title"), out);
                }
                None => self.warn("icon component without a valid ref"),
            },
            Component::Contributors => {
                let users: Vec<&str> = attr("users")
                    .map(|u| u.split(',').filter(|s| !s.is_empty()).collect())
                    .unwrap_or_default();
                B::contributors(&users, out);
            }
        }
    }

    /// Render a tab group. Non-tab children are gathered into the current panel.
    fn render_tabs(&mut self, children: &[Node], out: &mut String) {
        let group_id = self.next_tabs_id;
        self.next_tabs_id += 1;

        let mut labels: Vec<String> = Vec::new();
        let mut panels: Vec<String> = Vec::new();
        for child in children {
            match child {
                Node::Component {
                    component: Component::Tab,
                    attrs,
                    children,
                } => {
                    labels.push(attrs.get("label").cloned().unwrap_or_else(|| "Tab".to_owned()));
                    let inner = self.render_to_string(children);
                    panels.push(inner);
                }
                other => {
                    if panels.is_empty() {
                        labels.push("Tab".to_owned());
                        panels.push(String::new());
                    }
                    let mut buf = String::new();
                    self.render_node(other, &mut buf);
                    if let Some(last) = panels.last_mut() {
                        last.push_str(&buf);
                    }
                }
            }
        }

        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        B::tabs_start(group_id, &label_refs, out);
        for (index, inner) in panels.iter().enumerate() {
            B::tab(group_id, index, index == 0, inner, out);
        }
        B::tabs_end(out);
    }

    fn resolve_icon(&mut self, icon: &IconRef) -> Option<String> {
        let path = self.icons.get(icon).map(str::to_owned);
        if path.is_none() {
            self.warn(&format!("icon {icon} is not available"));
        }
        path
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}
