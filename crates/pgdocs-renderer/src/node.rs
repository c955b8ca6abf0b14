//! Render-ready document tree produced by the compiler.
//!
//! The tree is plain data (serde tagged enums) so compiled content can be
//! serialized, cached and rendered later by any [`RenderBackend`](crate::RenderBackend).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Components with a dedicated renderer, beyond plain markdown elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Component {
    Note,
    Tabs,
    Tab,
    Button,
    Icon,
    Contributors,
}

impl Component {
    pub const ALL: [Self; 6] = [
        Self::Note,
        Self::Tabs,
        Self::Tab,
        Self::Button,
        Self::Icon,
        Self::Contributors,
    ];

    /// Name used in intermediate `<pg-{name}>` elements.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tabs => "tabs",
            Self::Tab => "tab",
            Self::Button => "button",
            Self::Icon => "icon",
            Self::Contributors => "contributors",
        }
    }

    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag_name() == name)
    }
}

/// Column alignment of a table cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl From<pulldown_cmark::Alignment> for Align {
    fn from(value: pulldown_cmark::Alignment) -> Self {
        match value {
            pulldown_cmark::Alignment::None => Self::None,
            pulldown_cmark::Alignment::Left => Self::Left,
            pulldown_cmark::Alignment::Center => Self::Center,
            pulldown_cmark::Alignment::Right => Self::Right,
        }
    }
}

/// `thead`, `tbody` or `tfoot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableSection {
    Head,
    Body,
    Foot,
}

/// A node in the compiled document tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Text {
        value: String,
    },
    Heading {
        level: u8,
        id: String,
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Emphasis {
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Strikethrough {
        children: Vec<Node>,
    },
    InlineCode {
        value: String,
    },
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        value: String,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        title: String,
        children: Vec<Node>,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        title: String,
        alt: String,
    },
    List {
        /// Start number for ordered lists, `None` for bullet lists.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        children: Vec<Node>,
    },
    ListItem {
        /// Task list state, `None` for ordinary items.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked: Option<bool>,
        children: Vec<Node>,
    },
    BlockQuote {
        children: Vec<Node>,
    },
    Table {
        children: Vec<Node>,
    },
    TableSection {
        section: TableSection,
        children: Vec<Node>,
    },
    TableRow {
        children: Vec<Node>,
    },
    TableCell {
        header: bool,
        #[serde(default)]
        align: Align,
        children: Vec<Node>,
    },
    ThematicBreak,
    Break,
    Html {
        value: String,
    },
    Component {
        component: Component,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
}

impl Node {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Child nodes, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Heading { children, .. }
            | Self::Paragraph { children }
            | Self::Emphasis { children }
            | Self::Strong { children }
            | Self::Strikethrough { children }
            | Self::Link { children, .. }
            | Self::List { children, .. }
            | Self::ListItem { children, .. }
            | Self::BlockQuote { children }
            | Self::Table { children }
            | Self::TableSection { children, .. }
            | Self::TableRow { children }
            | Self::TableCell { children, .. }
            | Self::Component { children, .. } => children,
            Self::Text { .. }
            | Self::InlineCode { .. }
            | Self::Code { .. }
            | Self::Image { .. }
            | Self::ThematicBreak
            | Self::Break
            | Self::Html { .. } => &[],
        }
    }

    /// Concatenated plain text of this node and its descendants.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { value } | Self::InlineCode { value } | Self::Code { value, .. } => {
                out.push_str(value);
            }
            Self::Image { alt, .. } => out.push_str(alt),
            Self::Break => out.push(' '),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first, pre-order visit of this node and its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_component_tag_names_round_trip() {
        for component in Component::ALL {
            assert_eq!(Component::from_tag_name(component.tag_name()), Some(component));
        }
        assert_eq!(Component::from_tag_name("aside"), None);
    }

    #[test]
    fn test_plain_text_flattens_inline_markup() {
        let heading = Node::Heading {
            level: 2,
            id: "install".to_owned(),
            children: vec![
                Node::text("Install "),
                Node::InlineCode {
                    value: "@mdi/js".to_owned(),
                },
                Node::Emphasis {
                    children: vec![Node::text(" today")],
                },
            ],
        };
        assert_eq!(heading.plain_text(), "Install @mdi/js today");
    }

    #[test]
    fn test_serialized_shape() {
        let node = Node::Component {
            component: Component::Icon,
            attrs: BTreeMap::from([("ref".to_owned(), "mdi:home".to_owned())]),
            children: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"type":"component","component":"icon","attrs":{"ref":"mdi:home"}}"#
        );
        assert_eq!(
            serde_json::to_string(&Node::ThematicBreak).unwrap(),
            r#"{"type":"thematicBreak"}"#
        );
    }

    #[test]
    fn test_walk_is_pre_order() {
        let tree = Node::Paragraph {
            children: vec![
                Node::text("a"),
                Node::Strong {
                    children: vec![Node::text("b")],
                },
            ],
        };
        let mut seen = Vec::new();
        tree.walk(&mut |n| {
            if let Node::Text { value } = n {
                seen.push(value.as_str());
            }
        });
        assert_eq!(seen, vec!["a", "b"]);
    }
}
