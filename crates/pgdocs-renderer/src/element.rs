//! Intermediate `<pg-*>` elements.
//!
//! Directive handlers emit these so components survive markdown parsing as raw
//! HTML; the compiler parses them back into [`Node::Component`](crate::Node).

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::node::Component;
use crate::state::escape_html;

const PREFIX: &str = "pg-";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<(/?)pg-([a-z]+)((?:\s+[a-z][a-z0-9-]*="[^"]*")*)\s*(/?)>$"#).unwrap()
});

static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-z][a-z0-9-]*)="([^"]*)""#).unwrap());

/// A parsed intermediate element.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ElementTag {
    Open {
        component: Component,
        attrs: BTreeMap<String, String>,
    },
    /// `<pg-x ... />`, a component without children.
    Void {
        component: Component,
        attrs: BTreeMap<String, String>,
    },
    Close(Component),
}

/// `<pg-x a="1">`
pub(crate) fn open(component: Component, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<{PREFIX}{}", component.tag_name());
    push_attrs(&mut out, attrs);
    out.push('>');
    out
}

/// `<pg-x a="1" />`
pub(crate) fn void(component: Component, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<{PREFIX}{}", component.tag_name());
    push_attrs(&mut out, attrs);
    out.push_str(" />");
    out
}

/// `</pg-x>`
pub(crate) fn close(component: Component) -> String {
    format!("</{PREFIX}{}>", component.tag_name())
}

fn push_attrs(out: &mut String, attrs: &[(&str, &str)]) {
    for (key, value) in attrs {
        let _ = write!(out, r#" {key}="{}""#, escape_html(value));
    }
}

/// Parse one tag, ignoring surrounding whitespace.
pub(crate) fn parse(html: &str) -> Option<ElementTag> {
    let caps = TAG_RE.captures(html.trim())?;
    let component = Component::from_tag_name(&caps[2])?;

    if !caps[1].is_empty() {
        return (caps[3].is_empty() && caps[4].is_empty()).then_some(ElementTag::Close(component));
    }

    let attrs = ATTR_RE
        .captures_iter(&caps[3])
        .map(|a| (a[1].to_owned(), unescape_html(&a[2])))
        .collect();

    Some(if caps[4].is_empty() {
        ElementTag::Open { component, attrs }
    } else {
        ElementTag::Void { component, attrs }
    })
}

fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
