//! GitHub contribution links for a page.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

use crate::settings::SiteSettings;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component (UTF-8, `encodeURIComponent` rules).
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    percent_encode(input.as_bytes(), URI_COMPONENT).to_string()
}

/// Link to the document source on GitHub.
#[must_use]
pub fn edit_url(settings: &SiteSettings, slug: &str) -> String {
    format!(
        "https://github.com/{}/blob/{}/{}/{slug}.md",
        settings.repository, settings.branch, settings.source_path
    )
}

/// Link to a prefilled "suggested change" issue.
#[must_use]
pub fn issue_url(settings: &SiteSettings, slug: &str, title: &str) -> String {
    let issue_title = format!("Suggested Change to \"{title}\"");
    let body = format!(
        "*URL:* {}\n\n<!-- Describe how you would improve the documentation here -->",
        settings.page_url(slug)
    );
    format!(
        "https://github.com/{}/issues/new?title={}&body={}",
        settings.repository,
        encode_uri_component(&issue_title),
        encode_uri_component(&body)
    )
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;
    use pretty_assertions::assert_eq;

    use super::*;

    fn query_param<'a>(url: &'a str, name: &str) -> &'a str {
        let (_, query) = url.split_once('?').unwrap();
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
            .unwrap()
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("\"x\"/?#"), "%22x%22%2F%3F%23");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_edit_url() {
        let settings = SiteSettings::default();

        assert_eq!(
            edit_url(&settings, "guides/react"),
            "https://github.com/Pictogrammers/pictogrammers.com/blob/main/docs/guides/react.md"
        );
    }

    #[test]
    fn test_issue_url_exact() {
        let settings = SiteSettings::default();

        assert_eq!(
            issue_url(&settings, "why", "Why?"),
            "https://github.com/Pictogrammers/pictogrammers.com/issues/new\
             ?title=Suggested%20Change%20to%20%22Why%3F%22\
             &body=*URL%3A*%20https%3A%2F%2Fpictogrammers.com%2Fdocs%2Fwhy%0A%0A\
             %3C!--%20Describe%20how%20you%20would%20improve%20the%20documentation%20here%20--%3E"
        );
    }

    #[test]
    fn test_issue_url_decodes_to_title_and_slug() {
        let settings = SiteSettings::default();
        let title = "Tabs & \"Notes\" / 100% <done>";
        let slug = "library/mdi/guides/tabs";

        let url = issue_url(&settings, slug, title);

        assert!(!url.contains(' '));
        let decoded_title = percent_decode_str(query_param(&url, "title"))
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded_title, format!("Suggested Change to \"{title}\""));

        let decoded_body = percent_decode_str(query_param(&url, "body"))
            .decode_utf8()
            .unwrap();
        assert!(decoded_body.starts_with(&format!(
            "*URL:* https://pictogrammers.com/docs/{slug}\n\n"
        )));
    }
}
