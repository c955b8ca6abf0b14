//! `pgdocs render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use pgdocs_config::CliSettings;

use super::{SourceArgs, site_builder};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Document slug, e.g. `getting-started/react`.
    slug: String,

    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Write the page to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config(CliSettings::default())?;
        let page = site_builder(&config)?.render_slug(self.slug.trim_matches('/'))?;

        for warning in &page.warnings {
            output.warning(warning);
        }

        let html = page.to_html();
        match self.out {
            Some(path) => {
                std::fs::write(&path, html)?;
                output.success(&format!("Wrote {} to {}", page.route, path.display()));
            }
            None => std::io::stdout().lock().write_all(html.as_bytes())?,
        }
        Ok(())
    }
}
