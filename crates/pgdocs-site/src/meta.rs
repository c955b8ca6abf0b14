//! Head metadata for a docs page.

use std::fmt::Write;

use pgdocs_renderer::escape_html;

use crate::settings::SiteSettings;
use crate::store::Doc;

/// A single `<head>` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaTag {
    /// `<title>`.
    Title(String),
    /// `<meta name=".." content="..">`.
    Name { name: String, content: String },
    /// `<meta property=".." content="..">` (Open Graph).
    Property { property: String, content: String },
}

impl MetaTag {
    fn name(name: &str, content: &str) -> Self {
        Self::Name {
            name: name.to_owned(),
            content: content.to_owned(),
        }
    }

    fn property(property: &str, content: &str) -> Self {
        Self::Property {
            property: property.to_owned(),
            content: content.to_owned(),
        }
    }

    /// Write the tag as HTML, values escaped.
    pub fn write_html(&self, out: &mut String) {
        let _ = match self {
            Self::Title(title) => write!(out, "<title>{}</title>", escape_html(title)),
            Self::Name { name, content } => write!(
                out,
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ),
            Self::Property { property, content } => write!(
                out,
                r#"<meta property="{}" content="{}">"#,
                escape_html(property),
                escape_html(content)
            ),
        };
    }
}

/// `"{title} - {section} - {site}"`.
#[must_use]
pub fn page_title(settings: &SiteSettings, title: &str) -> String {
    format!("{title} - {} - {}", settings.section, settings.site_name)
}

/// Head tags for a document, in output order.
#[must_use]
pub fn page_meta(settings: &SiteSettings, doc: &Doc) -> Vec<MetaTag> {
    let title = page_title(settings, doc.title());
    let description = doc.front_matter.description.as_deref();

    let mut tags = vec![MetaTag::Title(title.clone()), MetaTag::name("title", &title)];
    if let Some(description) = description {
        tags.push(MetaTag::name("description", description));
    }

    tags.push(MetaTag::property("og:title", &title));
    if let Some(description) = description {
        tags.push(MetaTag::property("og:description", description));
    }
    tags.push(MetaTag::property("og:type", "article"));
    tags.push(MetaTag::property("og:url", &settings.page_url(&doc.slug)));

    tags.push(MetaTag::name("twitter:title", &title));
    if let Some(description) = description {
        tags.push(MetaTag::name("twitter:description", description));
    }
    if let Some(reading_time) = &doc.reading_time {
        tags.push(MetaTag::name("twitter:label1", "Reading Time"));
        tags.push(MetaTag::name("twitter:data1", &reading_time.text));
    }

    if doc.front_matter.hidden {
        tags.push(MetaTag::name("robots", "noindex"));
    }
    tags
}
