//! Command-line interface for codeweave
//!
//! Provides the `generate` cycle plus offline project and parsing commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;
mod parse;
mod projects;
mod utils;

/// Generate multi-file websites from natural-language prompts
#[derive(Parser)]
#[command(name = "codeweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one generation cycle against a new or existing project
    Generate(generate::GenerateArgs),

    /// Extract files from a saved model response without calling the model
    Parse(parse::ParseArgs),

    /// List stored projects
    Projects(projects::ProjectsArgs),

    /// Print a stored project's files
    Show(projects::ShowArgs),

    /// Delete a stored project
    Delete(projects::DeleteArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Parse(args) => parse::run(args),
        Commands::Projects(args) => projects::run_list(args),
        Commands::Show(args) => projects::run_show(args),
        Commands::Delete(args) => projects::run_delete(args),
    }
}
