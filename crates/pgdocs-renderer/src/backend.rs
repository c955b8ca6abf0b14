//! Element → output mapping.
//!
//! [`MarkdownRenderer`](crate::MarkdownRenderer) walks the compiled tree and
//! calls one [`RenderBackend`] entry per element of the docs vocabulary:
//! headings, table parts, code, and the `Note`, `Tabs`, `Tab`, `Button`,
//! `Icon` and `Contributors` components. Plain inline markup (emphasis,
//! links, lists) is written by the renderer itself.

use std::borrow::Cow;
use std::fmt::Write;

use crate::components::NoteKind;
use crate::icons::IconRef;
use crate::node::{Align, TableSection};
use crate::state::escape_html;

/// A `Button` component after attribute extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonProps<'a> {
    pub href: &'a str,
    pub label: &'a str,
    pub variant: Option<&'a str>,
}

/// Format-specific rendering.
///
/// Methods are associated functions writing into `out`; backends carry no
/// state between elements.
pub trait RenderBackend {
    /// `h1`–`h6`. `inner` is already rendered.
    fn heading(level: u8, id: &str, inner: &str, out: &mut String) {
        let _ = write!(out, r#"<h{level} id="{}">{inner}</h{level}>"#, escape_html(id));
    }

    fn table_start(out: &mut String) {
        out.push_str("<table>");
    }

    fn table_end(out: &mut String) {
        out.push_str("</table>");
    }

    /// `thead`, `tbody` or `tfoot`.
    fn table_section_start(section: TableSection, out: &mut String) {
        let _ = write!(out, "<{}>", section_tag(section));
    }

    fn table_section_end(section: TableSection, out: &mut String) {
        let _ = write!(out, "</{}>", section_tag(section));
    }

    fn table_row_start(out: &mut String) {
        out.push_str("<tr>");
    }

    fn table_row_end(out: &mut String) {
        out.push_str("</tr>");
    }

    /// `th` when `header`, otherwise `td`.
    fn table_cell_start(header: bool, align: Align, out: &mut String) {
        let tag = if header { "th" } else { "td" };
        match align_style(align) {
            Some(style) => {
                let _ = write!(out, r#"<{tag} style="text-align: {style}">"#);
            }
            None => {
                let _ = write!(out, "<{tag}>");
            }
        }
    }

    fn table_cell_end(header: bool, out: &mut String) {
        out.push_str(if header { "</th>" } else { "</td>" });
    }

    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    fn inline_code(code: &str, out: &mut String) {
        let _ = write!(out, "<code>{}</code>", escape_html(code));
    }

    fn blockquote_start(out: &mut String);

    fn blockquote_end(out: &mut String);

    /// Open a callout. `title` defaults to the kind's own label.
    fn note_start(kind: NoteKind, title: Option<&str>, out: &mut String);

    fn note_end(kind: NoteKind, out: &mut String);

    /// Open a tab group and write its tab list.
    fn tabs_start(group_id: usize, labels: &[&str], out: &mut String);

    fn tabs_end(out: &mut String);

    /// A single panel; the first panel of a group is `selected`.
    fn tab(group_id: usize, index: usize, selected: bool, inner: &str, out: &mut String);

    /// A link button. `icon` is the resolved icon and its path data, when any.
    fn button(props: &ButtonProps<'_>, icon: Option<(&IconRef, &str)>, out: &mut String);

    /// An inline icon. `path` is `None` when the icon is not available.
    fn icon(icon: &IconRef, path: Option<&str>, title: Option<&str>, out: &mut String);

    fn contributors(users: &[&str], out: &mut String);

    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Rewrite a link target. `base_path` is the current document's directory.
    fn transform_link<'a>(url: &'a str, _base_path: Option<&str>) -> Cow<'a, str> {
        Cow::Borrowed(url)
    }

    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}

fn section_tag(section: TableSection) -> &'static str {
    match section {
        TableSection::Head => "thead",
        TableSection::Body => "tbody",
        TableSection::Foot => "tfoot",
    }
}

fn align_style(align: Align) -> Option<&'static str> {
    match align {
        Align::None => None,
        Align::Left => Some("left"),
        Align::Center => Some("center"),
        Align::Right => Some("right"),
    }
}
