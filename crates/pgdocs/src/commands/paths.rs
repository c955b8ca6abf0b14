//! `pgdocs paths` command implementation.

use std::io::Write;

use clap::Args;
use pgdocs_config::CliSettings;

use super::{SourceArgs, site_builder};
use crate::error::CliError;

/// Arguments for the paths command.
#[derive(Args)]
pub(crate) struct PathsArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

impl PathsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.source.load_config(CliSettings::default())?;
        let paths = site_builder(&config)?.paths()?;

        let mut stdout = std::io::stdout().lock();
        for path in &paths {
            writeln!(stdout, "{}", path.route())?;
        }
        Ok(())
    }
}
