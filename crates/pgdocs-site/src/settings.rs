//! Page-level settings derived from the loaded configuration.

use pgdocs_config::Config;

/// Carbon ad slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdSlot {
    pub serve: String,
    pub placement: String,
}

/// Everything the page composer needs beyond the document itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    /// Public origin without trailing slash.
    pub base_url: String,
    pub site_name: String,
    /// Section label used in titles and the root breadcrumb.
    pub section: String,
    /// First route segment, e.g. `docs`.
    pub route_prefix: String,
    /// GitHub `owner/repo`.
    pub repository: String,
    pub branch: String,
    /// Directory of the markdown sources inside the repository.
    pub source_path: String,
    pub ads: Option<AdSlot>,
}

impl SiteSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.site.base_url.trim_end_matches('/').to_owned(),
            site_name: config.site.name.clone(),
            section: config.site.section.clone(),
            route_prefix: config.site.route_prefix.trim_matches('/').to_owned(),
            repository: config.github.repository.clone(),
            branch: config.github.branch.clone(),
            source_path: config.github.source_path.trim_matches('/').to_owned(),
            ads: config.ads.as_ref().map(|ads| AdSlot {
                serve: ads.carbon_serve.clone(),
                placement: ads.carbon_placement.clone(),
            }),
        }
    }

    /// Route of a document, e.g. `/docs/guides/react`.
    #[must_use]
    pub fn route(&self, slug: &str) -> String {
        format!("/{}/{slug}", self.route_prefix)
    }

    /// Absolute URL of a document.
    #[must_use]
    pub fn page_url(&self, slug: &str) -> String {
        format!("{}{}", self.base_url, self.route(slug))
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use pgdocs_config::AdsConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SiteSettings::default();

        assert_eq!(settings.base_url, "https://pictogrammers.com");
        assert_eq!(settings.section, "Docs");
        assert_eq!(settings.site_name, "Pictogrammers");
        assert_eq!(settings.repository, "Pictogrammers/pictogrammers.com");
        assert_eq!(settings.branch, "main");
        assert_eq!(settings.source_path, "docs");
        assert_eq!(settings.ads, None);
    }

    #[test]
    fn test_trims_slashes() {
        let mut config = Config::default();
        config.site.base_url = "https://example.com/".to_owned();
        config.site.route_prefix = "/guides/".to_owned();

        let settings = SiteSettings::from_config(&config);

        assert_eq!(settings.page_url("a/b"), "https://example.com/guides/a/b");
    }

    #[test]
    fn test_ads_from_config() {
        let mut config = Config::default();
        config.ads = Some(AdsConfig {
            carbon_serve: "CEAI".to_owned(),
            carbon_placement: "pictogrammerscom".to_owned(),
        });

        let settings = SiteSettings::from_config(&config);

        assert_eq!(
            settings.ads,
            Some(AdSlot {
                serve: "CEAI".to_owned(),
                placement: "pictogrammerscom".to_owned(),
            })
        );
    }
}
