//! Configuration management for pgdocs.
//!
//! Parses `pgdocs.toml` with serde and discovers it in the current directory
//! or any parent. CLI overrides are applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! These string values support `${VAR}` and `${VAR:-default}`:
//!
//! - `site.base_url`
//! - `github.repository`
//! - `ads.carbon_serve`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
    /// Override public site base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pgdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Public site identity.
    pub site: SiteConfig,
    /// Documentation paths (relative strings from TOML).
    docs: DocsConfigRaw,
    /// Source repository used for edit and issue links.
    pub github: GithubConfig,
    /// Reading time estimation.
    pub reading: ReadingConfig,
    /// Table of contents depth.
    pub toc: TocConfig,
    /// Advertisement slot (optional section).
    pub ads: Option<AdsConfig>,

    /// Resolved docs paths (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Public site identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site URL without trailing slash.
    pub base_url: String,
    /// Site name used in page titles.
    pub name: String,
    /// Section label used in page titles and the root breadcrumb.
    pub section: String,
    /// URL prefix for document routes (`docs` → `/docs/<slug>`).
    pub route_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pictogrammers.com".to_owned(),
            name: "Pictogrammers".to_owned(),
            section: "Docs".to_owned(),
            route_prefix: "docs".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    icons_dir: Option<String>,
}

/// Resolved documentation paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory containing `<slug>.md` files.
    pub source_dir: PathBuf,
    /// Directory the static site is written to.
    pub output_dir: PathBuf,
    /// Directory of `<library>.json` icon files, if configured.
    pub icons_dir: Option<PathBuf>,
}

/// Source repository settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// `owner/name` of the repository hosting the docs sources.
    pub repository: String,
    /// Branch used for edit links.
    pub branch: String,
    /// Directory of the markdown sources inside the repository.
    pub source_path: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repository: "Pictogrammers/pictogrammers.com".to_owned(),
            branch: "main".to_owned(),
            source_path: "docs".to_owned(),
        }
    }
}

/// Reading time estimation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
        }
    }
}

/// Heading levels included in the table of contents.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub min_level: u8,
    pub max_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

/// Carbon Ads slot.
#[derive(Debug, Deserialize)]
pub struct AdsConfig {
    /// Carbon `serve` code.
    pub carbon_serve: String,
    /// Carbon placement name.
    #[serde(default = "default_carbon_placement")]
    pub carbon_placement: String,
}

impl AdsConfig {
    /// Validate that all fields are set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.carbon_serve, "ads.carbon_serve")?;
        require_non_empty(&self.carbon_placement, "ads.carbon_placement")?;
        Ok(())
    }
}

fn default_carbon_placement() -> String {
    "pictogrammerscom".to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`github.repository`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

fn require_heading_level(level: u8, field: &str) -> Result<(), ConfigError> {
    if !(1..=6).contains(&level) {
        return Err(ConfigError::Validation(format!(
            "{field} must be between 1 and 6"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `pgdocs.toml` in the current directory and parents, falling back to
    /// defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = base_url.trim_end_matches('/').to_owned();
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            github: GithubConfig::default(),
            reading: ReadingConfig::default(),
            toc: TocConfig::default(),
            ads: None,
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                output_dir: base.join("out"),
                icons_dir: None,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_github()?;
        self.validate_reading()?;
        if let Some(ads) = &self.ads {
            ads.validate()?;
        }
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        require_non_empty(&self.site.name, "site.name")?;
        require_non_empty(&self.site.section, "site.section")?;
        require_non_empty(&self.site.route_prefix, "site.route_prefix")?;
        if self.site.route_prefix.starts_with('/') || self.site.route_prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.route_prefix must not start or end with '/'".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_github(&self) -> Result<(), ConfigError> {
        let repo = &self.github.repository;
        require_non_empty(repo, "github.repository")?;
        let valid = repo
            .split_once('/')
            .is_some_and(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'));
        if !valid {
            return Err(ConfigError::Validation(
                "github.repository must have the form owner/name".to_owned(),
            ));
        }
        require_non_empty(&self.github.branch, "github.branch")?;
        Ok(())
    }

    fn validate_reading(&self) -> Result<(), ConfigError> {
        if self.reading.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "reading.words_per_minute must be greater than 0".to_owned(),
            ));
        }
        require_heading_level(self.toc.min_level, "toc.min_level")?;
        require_heading_level(self.toc.max_level, "toc.max_level")?;
        if self.toc.min_level > self.toc.max_level {
            return Err(ConfigError::Validation(
                "toc.min_level cannot exceed toc.max_level".to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?
            .trim_end_matches('/')
            .to_owned();
        self.github.repository = expand::expand_env(&self.github.repository, "github.repository")?;

        if let Some(ref mut ads) = self.ads {
            ads.carbon_serve = expand::expand_env(&ads.carbon_serve, "ads.carbon_serve")?;
        }

        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            output_dir: resolve(self.docs.output_dir.as_deref(), "out"),
            icons_dir: self.docs.icons_dir.as_deref().map(|d| config_dir.join(d)),
        };
    }
}
