//! HTML page template for docs pages.

use std::fmt::Write;

use pgdocs_renderer::{TocEntry, escape_html};

use crate::page::{Breadcrumb, ComposedPage};
use crate::settings::AdSlot;

/// GitHub mark.
const PATH_GITHUB: &str = "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12";

/// `mdi:text-box-plus`.
const PATH_TEXT_BOX_PLUS: &str = "M17,14H19V17H22V19H19V22H17V19H14V17H17V14M5,3H19C20.11,3 21,3.89 21,5V12.8C20.39,12.45 19.72,12.2 19,12.08V5H5V19H12.08C12.2,19.72 12.45,20.39 12.8,21H5C3.89,21 3,20.11 3,19V5C3,3.89 3.89,3 5,3M7,7H17V9H7V7M7,11H17V12.08C16.15,12.22 15.37,12.54 14.68,13H7V11M7,15H12V17H7V15Z";

/// Render a complete docs page.
pub fn render_page(page: &ComposedPage) -> String {
    let mut html = String::with_capacity(page.body_html.len() + 8192);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    for tag in &page.meta {
        tag.write_html(&mut html);
        html.push('\n');
    }
    html.push_str("<style>\n");
    html.push_str(".breadcrumb-item + .breadcrumb-item::before {\n");
    html.push_str("  content: \"/\";\n");
    html.push_str("  margin: 0 0.5rem;\n");
    html.push_str("}\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"docs\">\n<div class=\"docs-container\">\n");

    html.push_str("<article class=\"docs-main\" role=\"main\">\n");
    render_breadcrumbs(&mut html, &page.breadcrumbs);
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&page.title));
    html.push_str("<div class=\"docs-content\">\n");
    html.push_str(&page.body_html);
    html.push_str("\n</div>\n</article>\n");

    html.push_str("<aside>\n<div class=\"docs-sidenav\">\n");
    if let Some(ads) = &page.ads {
        render_ad(&mut html, ads);
    }
    render_toc(&mut html, &page.toc);
    render_improve(&mut html, &page.edit_url, &page.issue_url);
    html.push_str("</div>\n</aside>\n");

    html.push_str("</div>\n</div>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_breadcrumbs(html: &mut String, breadcrumbs: &[Breadcrumb]) {
    html.push_str("<nav aria-label=\"breadcrumb\">\n<ol class=\"breadcrumb\">\n");
    for crumb in breadcrumbs {
        let label = escape_html(&crumb.label);
        let _ = match &crumb.href {
            Some(href) => writeln!(
                html,
                "<li class=\"breadcrumb-item\"><a href=\"{}\">{label}</a></li>",
                escape_html(href)
            ),
            None => writeln!(html, "<li class=\"breadcrumb-item\"><span>{label}</span></li>"),
        };
    }
    html.push_str("</ol>\n</nav>\n");
}

/// Carbon loads its ad into the script's parent.
fn render_ad(html: &mut String, ads: &AdSlot) {
    let src = format!(
        "//cdn.carbonads.com/carbon.js?serve={}&placement={}",
        ads.serve, ads.placement
    );
    let _ = writeln!(
        html,
        "<div class=\"carbon-ad\"><script async type=\"text/javascript\" src=\"{}\" id=\"_carbonads_js\"></script></div>",
        escape_html(&src)
    );
}

fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<nav class=\"toc\">\n<p class=\"toc-title\">On this page</p>\n<ul>\n");
    let top = toc.iter().map(|e| e.level).min().unwrap_or(2);
    for entry in toc {
        let indent = entry.level.saturating_sub(top);
        let class = if indent > 0 {
            format!(" class=\"toc-indent-{indent}\"")
        } else {
            String::new()
        };
        let _ = writeln!(
            html,
            "<li{class}><a href=\"#{}\">{}</a></li>",
            escape_html(&entry.id),
            escape_html(&entry.title)
        );
    }
    html.push_str("</ul>\n</nav>\n");
}

fn render_improve(html: &mut String, edit_url: &str, issue_url: &str) {
    html.push_str("<div class=\"docs-edits\">\n");
    html.push_str("<p class=\"docs-improve-head\">Improve This Article</p>\n");
    render_link_button(html, edit_url, PATH_GITHUB, "Edit on GitHub");
    render_link_button(html, issue_url, PATH_TEXT_BOX_PLUS, "Suggest a Change");
    html.push_str("</div>\n");
}

fn render_link_button(html: &mut String, href: &str, icon: &str, label: &str) {
    let _ = writeln!(
        html,
        "<a class=\"button button-outlined button-full\" href=\"{}\">\
         <svg class=\"button-icon\" viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path d=\"{icon}\" /></svg>\
         <span>{label}</span></a>",
        escape_html(href)
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::meta::MetaTag;

    fn page() -> ComposedPage {
        ComposedPage {
            slug: "guides/react".to_owned(),
            route: "/docs/guides/react".to_owned(),
            title: "React".to_owned(),
            meta: vec![MetaTag::Title("React - Docs - Pictogrammers".to_owned())],
            breadcrumbs: vec![Breadcrumb {
                label: "Docs".to_owned(),
                href: Some("/docs/".to_owned()),
            }],
            body_html: "<p>Hello world</p>".to_owned(),
            toc: Vec::new(),
            ads: None,
            edit_url: "https://github.com/o/r/blob/main/docs/guides/react.md".to_owned(),
            issue_url: "https://github.com/o/r/issues/new?title=a&body=b".to_owned(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn render_page_contains_content() {
        let html = render_page(&page());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>React - Docs - Pictogrammers</title>"));
        assert!(html.contains("<h1>React</h1>"));
        assert!(html.contains("<p>Hello world</p>"));
    }

    #[test]
    fn render_page_breadcrumbs() {
        let mut page = page();
        page.breadcrumbs.push(Breadcrumb {
            label: "Material Design Icons".to_owned(),
            href: None,
        });

        let html = render_page(&page);

        assert!(html.contains("<li class=\"breadcrumb-item\"><a href=\"/docs/\">Docs</a></li>"));
        assert!(html.contains("<li class=\"breadcrumb-item\"><span>Material Design Icons</span></li>"));
    }

    #[test]
    fn render_page_improve_links_escape_ampersand() {
        let html = render_page(&page());

        assert!(html.contains("Improve This Article"));
        assert!(html.contains("href=\"https://github.com/o/r/blob/main/docs/guides/react.md\""));
        assert!(html.contains("href=\"https://github.com/o/r/issues/new?title=a&amp;body=b\""));
        assert!(html.contains("Edit on GitHub"));
        assert!(html.contains("Suggest a Change"));
    }

    #[test]
    fn render_page_toc_indents_nested_levels() {
        let mut page = page();
        page.toc = vec![
            TocEntry {
                level: 2,
                title: "Section".to_owned(),
                id: "section".to_owned(),
            },
            TocEntry {
                level: 3,
                title: "Sub & more".to_owned(),
                id: "sub-more".to_owned(),
            },
        ];

        let html = render_page(&page);

        assert!(html.contains("On this page"));
        assert!(html.contains("<li><a href=\"#section\">Section</a></li>"));
        assert!(html.contains("<li class=\"toc-indent-1\"><a href=\"#sub-more\">Sub &amp; more</a></li>"));
    }

    #[test]
    fn render_page_without_toc_or_ads() {
        let html = render_page(&page());

        assert!(!html.contains("On this page"));
        assert!(!html.contains("carbon"));
    }

    #[test]
    fn render_page_ad_slot() {
        let mut page = page();
        page.ads = Some(AdSlot {
            serve: "CEAI".to_owned(),
            placement: "pictogrammerscom".to_owned(),
        });

        let html = render_page(&page);

        assert!(html.contains(
            "src=\"//cdn.carbonads.com/carbon.js?serve=CEAI&amp;placement=pictogrammerscom\""
        ));
    }

    #[test]
    fn render_page_escapes_title() {
        let mut page = page();
        page.title = "<script>".to_owned();

        let html = render_page(&page);

        assert_eq!(html.matches("<script>").count(), 0);
        assert!(html.contains("<h1>&lt;script&gt;</h1>"));
    }
}
