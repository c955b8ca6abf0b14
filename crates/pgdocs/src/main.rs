//! pgdocs CLI - Pictogrammers docs pages.
//!
//! Provides commands for:
//! - `build`: Write every docs page to the output directory
//! - `paths`: List the route of every page
//! - `render`: Render a single page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, PathsArgs, RenderArgs};
use output::Output;

/// pgdocs - Pictogrammers docs pages.
#[derive(Parser)]
#[command(name = "pgdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every docs page.
    Build(BuildArgs),
    /// Print the route of every docs page.
    Paths(PathsArgs),
    /// Render a single docs page.
    Render(RenderArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.source.verbose,
            Self::Paths(args) => args.source.verbose,
            Self::Render(args) => args.source.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Paths(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
