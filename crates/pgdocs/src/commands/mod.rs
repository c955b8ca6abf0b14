//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod paths;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use pgdocs_config::{CliSettings, Config};
use pgdocs_site::{DocStore, SiteSettings, StaticSiteBuilder};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use paths::PathsArgs;
pub(crate) use render::RenderArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover pgdocs.toml).
    #[arg(short, long, env = "PGDOCS_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    pub(crate) source_dir: Option<PathBuf>,

    /// Enable info-level logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SourceArgs {
    /// Load configuration, applying `overrides` on top of the shared options.
    pub(crate) fn load_config(&self, overrides: CliSettings) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..overrides
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Wire store and settings for a loaded configuration.
pub(crate) fn site_builder(config: &Config) -> Result<StaticSiteBuilder, CliError> {
    let store = DocStore::from_config(config)?;
    Ok(StaticSiteBuilder::new(store, SiteSettings::from_config(config)))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SourceArgs,
    }

    #[test]
    fn test_source_args_parse() {
        let cli = TestCli::parse_from(["pgdocs", "-s", "content", "-v"]);

        assert_eq!(cli.source.source_dir, Some(PathBuf::from("content")));
        assert!(cli.source.verbose);
    }
}
