//! HTML backend for the docs component set.

use std::borrow::Cow;
use std::fmt::Write;

use crate::backend::{ButtonProps, RenderBackend};
use crate::components::NoteKind;
use crate::icons::IconRef;
use crate::state::escape_html;

// Material Design Icons path data (24x24).
const PATH_INFORMATION: &str = "M13,9H11V7H13M13,17H11V11H13M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2Z";
const PATH_LIGHTBULB: &str = "M12,2A7,7 0 0,0 5,9C5,11.38 6.19,13.47 8,14.74V17A1,1 0 0,0 9,18H15A1,1 0 0,0 16,17V14.74C17.81,13.47 19,11.38 19,9A7,7 0 0,0 12,2M9,21A1,1 0 0,0 10,22H14A1,1 0 0,0 15,21V20H9V21Z";
const PATH_ALERT: &str = "M13,14H11V10H13M13,18H11V16H13M1,21H23L12,2L1,21Z";
const PATH_ALERT_OCTAGON: &str = "M13,13H11V7H13M13,17H11V15H13M15.73,3H8.27L3,8.27V15.73L8.27,21H15.73L21,15.73V8.27L15.73,3Z";

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<pre><code>` for code blocks
/// - callout `<div>`s with an MDI icon for notes
/// - ARIA tab lists for tabs
/// - inline `<svg>` for icons
/// - `.md` link resolution to site routes
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        match lang {
            Some(lang) => {
                let _ = write!(
                    out,
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    escape_html(lang),
                    escape_html(content)
                );
            }
            None => {
                let _ = write!(out, "<pre><code>{}</code></pre>", escape_html(content));
            }
        }
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn note_start(kind: NoteKind, title: Option<&str>, out: &mut String) {
        let (path, label) = match kind {
            NoteKind::Info => (PATH_INFORMATION, "Info"),
            NoteKind::Tip => (PATH_LIGHTBULB, "Tip"),
            NoteKind::Warning => (PATH_ALERT, "Warning"),
            NoteKind::Danger => (PATH_ALERT_OCTAGON, "Danger"),
        };
        let _ = write!(
            out,
            r#"<div class="note note-{kind}"><div class="note-title"><svg class="note-icon" viewBox="0 0 24 24" aria-hidden="true"><path d="{path}" /></svg>{}</div><div class="note-content">"#,
            escape_html(title.unwrap_or(label))
        );
    }

    fn note_end(_kind: NoteKind, out: &mut String) {
        out.push_str("</div></div>");
    }

    fn tabs_start(group_id: usize, labels: &[&str], out: &mut String) {
        let _ = write!(out, r#"<div class="tabs" id="tabs-{group_id}">"#);
        out.push_str(r#"<div class="tabs-buttons" role="tablist">"#);
        for (idx, label) in labels.iter().enumerate() {
            let selected = idx == 0;
            let _ = write!(
                out,
                r#"<button role="tab" id="tab-{group_id}-{idx}" aria-controls="panel-{group_id}-{idx}" aria-selected="{selected}" tabindex="{}">{}</button>"#,
                if selected { "0" } else { "-1" },
                escape_html(label)
            );
        }
        out.push_str("</div>");
    }

    fn tabs_end(out: &mut String) {
        out.push_str("</div>");
    }

    fn tab(group_id: usize, index: usize, selected: bool, inner: &str, out: &mut String) {
        let hidden = if selected { "" } else { " hidden" };
        let _ = write!(
            out,
            r#"<div role="tabpanel" id="panel-{group_id}-{index}" aria-labelledby="tab-{group_id}-{index}"{hidden}>{inner}</div>"#
        );
    }

    fn button(props: &ButtonProps<'_>, icon: Option<(&IconRef, &str)>, out: &mut String) {
        let variant = props.variant.unwrap_or("contained");
        let _ = write!(
            out,
            r#"<a class="button button-{}" href="{}">"#,
            escape_html(variant),
            escape_html(props.href)
        );
        if let Some((_, path)) = icon {
            write_svg(path, "button-icon", None, out);
        }
        let _ = write!(out, "<span>{}</span></a>", escape_html(props.label));
    }

    fn icon(icon: &IconRef, path: Option<&str>, title: Option<&str>, out: &mut String) {
        match path {
            Some(path) => write_svg(path, "icon", title, out),
            None => {
                let _ = write!(
                    out,
                    r#"<span class="icon icon-missing" data-icon="{}"></span>"#,
                    escape_html(&icon.to_string())
                );
            }
        }
    }

    fn contributors(users: &[&str], out: &mut String) {
        out.push_str(r#"<ul class="contributors">"#);
        for user in users {
            let user = escape_html(user);
            let _ = write!(
                out,
                r#"<li><a href="https://github.com/{user}" title="{user}"><img src="https://github.com/{user}.png?size=64" alt="{user}" width="32" height="32" loading="lazy"></a></li>"#
            );
        }
        out.push_str("</ul>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        let _ = write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        );
    }

    fn transform_link<'a>(url: &'a str, base_path: Option<&str>) -> Cow<'a, str> {
        match base_path {
            Some(base) => Cow::Owned(resolve_link(url, base)),
            None => Cow::Borrowed(url),
        }
    }
}

/// `<svg>` with a single path; decorative unless it has a title.
fn write_svg(path: &str, class: &str, title: Option<&str>, out: &mut String) {
    match title {
        Some(title) => {
            let title = escape_html(title);
            let _ = write!(
                out,
                r#"<svg class="{class}" viewBox="0 0 24 24" role="img" aria-label="{title}"><title>{title}</title><path d="{}" /></svg>"#,
                escape_html(path)
            );
        }
        None => {
            let _ = write!(
                out,
                r#"<svg class="{class}" viewBox="0 0 24 24" aria-hidden="true"><path d="{}" /></svg>"#,
                escape_html(path)
            );
        }
    }
}

/// Resolve a markdown link against the current document's route directory.
///
/// - `./sibling.md` → `/docs/guides/sibling`
/// - `../other.md` → `/docs/other`
/// - `library/index.md#usage` → `/docs/guides/library#usage`
///
/// External links, fragment-only links, non-markdown links and relative links
/// climbing above the route prefix are returned unchanged. Absolute `.md`
/// paths lose only their extension.
#[allow(clippy::case_sensitive_file_extension_comparisons)]
fn resolve_link(url: &str, base_path: &str) -> String {
    if url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.starts_with('#')
    {
        return url.to_owned();
    }

    let (path_part, fragment) = match url.find('#') {
        Some(hash) => (&url[..hash], &url[hash..]),
        None => (url, ""),
    };
    if !path_part.ends_with(".md") {
        return url.to_owned();
    }

    let resolved = if path_part.starts_with('/') {
        path_part.trim_start_matches('/').to_owned()
    } else {
        match resolve_relative_path(path_part, base_path) {
            Some(resolved) => resolved,
            None => return url.to_owned(),
        }
    };

    let clean = resolved.strip_suffix(".md").unwrap_or(&resolved);
    let clean = clean.strip_suffix("/index").unwrap_or(clean);
    format!("/{clean}{fragment}")
}

/// Join `relative` onto the `base` directory.
///
/// The first segment of `base` is the route prefix; returns `None` when `..`
/// would climb above it.
fn resolve_relative_path(relative: &str, base: &str) -> Option<String> {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    let floor = segments.len().min(1);
    for component in relative.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if segments.len() <= floor {
                    return None;
                }
                segments.pop();
            }
            _ => segments.push(component),
        }
    }
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(s: &str) -> IconRef {
        IconRef::parse(s).unwrap()
    }

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        HtmlBackend::code_block(Some("ts"), "a < b", &mut out);
        assert_eq!(out, r#"<pre><code class="language-ts">a &lt; b</code></pre>"#);
    }

    #[test]
    fn test_code_block_without_language() {
        let mut out = String::new();
        HtmlBackend::code_block(None, "plain", &mut out);
        assert_eq!(out, "<pre><code>plain</code></pre>");
    }

    #[test]
    fn test_heading_default() {
        let mut out = String::new();
        HtmlBackend::heading(3, "usage", "Usage", &mut out);
        assert_eq!(out, r#"<h3 id="usage">Usage</h3>"#);
    }

    #[test]
    fn test_note_default_and_custom_title() {
        let mut out = String::new();
        HtmlBackend::note_start(NoteKind::Warning, None, &mut out);
        HtmlBackend::note_end(NoteKind::Warning, &mut out);
        assert!(out.starts_with(r#"<div class="note note-warning">"#));
        assert!(out.contains(PATH_ALERT));
        assert!(out.contains("</svg>Warning</div>"));

        let mut out = String::new();
        HtmlBackend::note_start(NoteKind::Tip, Some("<Pro> tip"), &mut out);
        assert!(out.contains("</svg>&lt;Pro&gt; tip</div>"));
    }

    #[test]
    fn test_tabs_markup() {
        let mut out = String::new();
        HtmlBackend::tabs_start(0, &["npm", "yarn"], &mut out);
        HtmlBackend::tab(0, 0, true, "<p>a</p>", &mut out);
        HtmlBackend::tab(0, 1, false, "<p>b</p>", &mut out);
        HtmlBackend::tabs_end(&mut out);

        assert!(out.contains(r#"role="tablist""#));
        assert!(out.contains(
            r#"<button role="tab" id="tab-0-0" aria-controls="panel-0-0" aria-selected="true" tabindex="0">npm</button>"#
        ));
        assert!(out.contains(r#"aria-selected="false" tabindex="-1">yarn</button>"#));
        assert!(out.contains(
            r#"<div role="tabpanel" id="panel-0-1" aria-labelledby="tab-0-1" hidden><p>b</p></div>"#
        ));
        assert!(out.ends_with("</div></div>"));
    }

    #[test]
    fn test_button_with_icon() {
        let mut out = String::new();
        let props = ButtonProps {
            href: "https://github.com/Templarian/MaterialDesign",
            label: "GitHub",
            variant: Some("outlined"),
        };
        let github = icon("mdi:github");
        HtmlBackend::button(&props, Some((&github, "M12,2Z")), &mut out);
        assert_eq!(
            out,
            r#"<a class="button button-outlined" href="https://github.com/Templarian/MaterialDesign"><svg class="button-icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M12,2Z" /></svg><span>GitHub</span></a>"#
        );
    }

    #[test]
    fn test_icon_resolved_and_missing() {
        let mut out = String::new();
        HtmlBackend::icon(&icon("mdi:home"), Some("M10,20Z"), Some("Home"), &mut out);
        assert_eq!(
            out,
            r#"<svg class="icon" viewBox="0 0 24 24" role="img" aria-label="Home"><title>Home</title><path d="M10,20Z" /></svg>"#
        );

        let mut out = String::new();
        HtmlBackend::icon(&icon("mdi:nope"), None, None, &mut out);
        assert_eq!(out, r#"<span class="icon icon-missing" data-icon="mdi:nope"></span>"#);
    }

    #[test]
    fn test_contributors() {
        let mut out = String::new();
        HtmlBackend::contributors(&["Templarian"], &mut out);
        assert!(out.starts_with(r#"<ul class="contributors"><li><a href="https://github.com/Templarian""#));
        assert!(out.ends_with("</li></ul>"));
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        HtmlBackend::image("logo.png", "Logo", "The logo", &mut out);
        assert_eq!(out, r#"<img src="logo.png" title="The logo" alt="Logo">"#);
    }

    #[test]
    fn test_resolve_link_relative() {
        assert_eq!(resolve_link("./sibling.md", "docs/guides"), "/docs/guides/sibling");
        assert_eq!(resolve_link("../other.md", "docs/guides"), "/docs/other");
        assert_eq!(
            resolve_link("library/index.md#usage", "docs/guides"),
            "/docs/guides/library#usage"
        );
    }

    #[test]
    fn test_resolve_link_unchanged() {
        assert_eq!(resolve_link("https://example.com/a.md", "docs"), "https://example.com/a.md");
        assert_eq!(resolve_link("#section", "docs"), "#section");
        assert_eq!(resolve_link("./image.png", "docs"), "./image.png");
    }

    #[test]
    fn test_resolve_link_stays_under_route_prefix() {
        assert_eq!(resolve_link("../../../up.md", "docs/a/b"), "../../../up.md");
        assert_eq!(resolve_link("../../other.md#x", "docs/guides"), "../../other.md#x");
        assert_eq!(resolve_link("../a/../b.md", "docs/guides"), "/docs/b");
    }

    #[test]
    fn test_transform_link_without_base_path() {
        assert_eq!(HtmlBackend::transform_link("./page.md", None), "./page.md");
    }
}
