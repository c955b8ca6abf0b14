//! `pgdocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use pgdocs_config::CliSettings;

use super::{SourceArgs, site_builder};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Output directory for the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Public site URL used in page metadata and issue links (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Render pages one at a time.
    #[arg(long)]
    sequential: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config(CliSettings {
            output_dir: self.output_dir,
            base_url: self.base_url,
            ..CliSettings::default()
        })?;
        let output_dir = config.docs_resolved.output_dir.clone();

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let builder = site_builder(&config)?.with_parallel(!self.sequential);
        let report = builder.build(&output_dir)?;

        for warning in &report.warnings {
            output.warning(&format!("{}: {}", warning.slug, warning.message));
        }
        output.success(&format!(
            "Built {} pages to {}",
            report.pages,
            output_dir.display()
        ));
        Ok(())
    }
}
