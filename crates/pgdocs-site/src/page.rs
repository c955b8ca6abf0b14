//! Page composition.
//!
//! [`PageComposer`] binds a document's compiled body to the docs component
//! set and gathers the page chrome around it: head metadata, breadcrumbs,
//! the outline, the ad slot and the contribution links.

use pgdocs_renderer::{CompiledContent, HtmlBackend, MarkdownRenderer, TocEntry};

use crate::links::{edit_url, issue_url};
use crate::meta::{MetaTag, page_meta};
use crate::settings::{AdSlot, SiteSettings};
use crate::store::Doc;
use crate::template::render_page;

/// A breadcrumb entry; only the root links anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

/// Everything needed to write a docs page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedPage {
    pub slug: String,
    pub route: String,
    /// Document title, shown as the page `<h1>`.
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub body_html: String,
    pub toc: Vec<TocEntry>,
    pub ads: Option<AdSlot>,
    pub edit_url: String,
    pub issue_url: String,
    /// Compile and render warnings for the body.
    pub warnings: Vec<String>,
}

impl ComposedPage {
    /// The complete HTML document.
    #[must_use]
    pub fn to_html(&self) -> String {
        render_page(self)
    }
}

/// Composes docs pages for one site.
#[derive(Clone, Debug, Default)]
pub struct PageComposer {
    settings: SiteSettings,
}

impl PageComposer {
    #[must_use]
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Render `compiled` (the compiled body of `doc`) and lay out the page.
    #[must_use]
    pub fn compose(&self, doc: &Doc, compiled: CompiledContent) -> ComposedPage {
        let result = MarkdownRenderer::<HtmlBackend>::new()
            .with_icons(doc.available_icons.clone())
            .with_base_path(self.link_base(&doc.slug))
            .with_source(format!("{}.md", doc.slug))
            .render(compiled);

        ComposedPage {
            slug: doc.slug.clone(),
            route: self.settings.route(&doc.slug),
            title: doc.title().to_owned(),
            meta: page_meta(&self.settings, doc),
            breadcrumbs: self.breadcrumbs(doc),
            body_html: result.html,
            toc: doc.toc.clone(),
            ads: self.settings.ads.clone(),
            edit_url: edit_url(&self.settings, &doc.slug),
            issue_url: issue_url(&self.settings, &doc.slug, doc.title()),
            warnings: result.warnings,
        }
    }

    /// Section root, then library and category when set.
    #[must_use]
    pub fn breadcrumbs(&self, doc: &Doc) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            label: self.settings.section.clone(),
            href: Some(format!("/{}/", self.settings.route_prefix)),
        }];
        let labels = [&doc.front_matter.library, &doc.front_matter.category];
        crumbs.extend(labels.into_iter().flatten().map(|label| Breadcrumb {
            label: label.clone(),
            href: None,
        }));
        crumbs
    }

    /// Directory relative `.md` links resolve against: `docs/guides` for
    /// `guides/react`.
    fn link_base(&self, slug: &str) -> String {
        match slug.rsplit_once('/') {
            Some((dir, _)) => format!("{}/{dir}", self.settings.route_prefix),
            None => self.settings.route_prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pgdocs_renderer::{IconLibraries, IconRef};
    use pgdocs_storage::MockStorage;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::DocStore;

    const REACT: &str = "---\ntitle: React\ndescription: Icons in React.\n\
                         library: Material Design Icons\ncategory: Installation\n---\n\
                         # React\n\nSee [Angular](../angular.md).\n\n## Install\n\n\
                         ::button[Home]{href=\"/\" icon=\"mdi:home\"}\n\n\
                         :icon[mdi:missing]\n";

    fn compose(source: &str) -> ComposedPage {
        let mut icons = IconLibraries::new();
        icons.insert(&IconRef::parse("mdi:home").unwrap(), "M10 20");
        let store = DocStore::new(Arc::new(MockStorage::new().with_doc("guides/react/intro", source)))
            .with_icons(icons);
        let (doc, compiled) = store.get_doc_with_content("guides/react/intro").unwrap();
        PageComposer::default().compose(&doc, compiled)
    }

    fn labels(page: &ComposedPage) -> Vec<&str> {
        page.breadcrumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_breadcrumbs_with_library_and_category() {
        let page = compose(REACT);

        assert_eq!(labels(&page), vec!["Docs", "Material Design Icons", "Installation"]);
        assert_eq!(page.breadcrumbs[0].href.as_deref(), Some("/docs/"));
        assert!(page.breadcrumbs[1..].iter().all(|c| c.href.is_none()));
    }

    #[test]
    fn test_breadcrumbs_without_library() {
        let page = compose("---\ntitle: T\ncategory: General\n---\nText");

        assert_eq!(labels(&page), vec!["Docs", "General"]);
    }

    #[test]
    fn test_breadcrumbs_root_only() {
        let page = compose("---\ntitle: T\n---\nText");

        assert_eq!(labels(&page), vec!["Docs"]);
    }

    #[test]
    fn test_compose_fields() {
        let page = compose(REACT);

        assert_eq!(page.route, "/docs/guides/react/intro");
        assert_eq!(page.title, "React");
        assert_eq!(
            page.edit_url,
            "https://github.com/Pictogrammers/pictogrammers.com/blob/main/docs/guides/react/intro.md"
        );
        assert!(page.issue_url.contains("title=Suggested%20Change%20to%20%22React%22"));
        assert_eq!(page.ads, None);
    }

    #[test]
    fn test_compose_renders_body() {
        let page = compose(REACT);

        assert!(page.body_html.contains(r#"<a href="/docs/guides/angular">Angular</a>"#));
        assert!(page.body_html.contains(r#"<path d="M10 20""#));
        assert!(page.body_html.contains("icon-missing"));
        assert!(
            page.warnings
                .iter()
                .any(|w| w.contains("icon mdi:missing is not available"))
        );
    }

    #[test]
    fn test_warnings_name_the_doc_file() {
        let page = compose("---\ntitle: T\n---\n:::tab[Solo]\nA\n:::\n\nHi :meta[missing]\n\n:icon[mdi:missing]\n");

        assert_eq!(page.warnings.len(), 3, "{:?}", page.warnings);
        assert!(
            page.warnings
                .iter()
                .all(|w| w.starts_with("guides/react/intro.md:")),
            "{:?}",
            page.warnings
        );
    }

    #[test]
    fn test_indented_code_keeps_directives_literal() {
        let page = compose("---\ntitle: T\n---\nText\n\n    :icon[mdi:home] and `x`\n");

        assert!(page.body_html.contains("<pre><code>:icon[mdi:home] and `x`\n</code></pre>"));
        assert!(!page.body_html.contains("pg-icon"));
        assert!(!page.body_html.contains("<svg"));
        assert!(page.warnings.is_empty(), "{:?}", page.warnings);
    }

    #[test]
    fn test_toc_anchors_match_heading_ids() {
        let page = compose(REACT);

        assert_eq!(page.toc.len(), 1);
        for entry in &page.toc {
            assert!(page.body_html.contains(&format!(r#"id="{}""#, entry.id)));
        }
    }
}
