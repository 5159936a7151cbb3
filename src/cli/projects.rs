//! Project management commands

use super::utils::{open_store, resolve_config, write_files};
use anyhow::{Context, Result};
use clap::Args;
use codeweave::ProjectStore;
use std::path::PathBuf;

#[derive(Args)]
pub struct ProjectsArgs {
    /// Owner whose projects to list (defaults to the configured owner)
    #[arg(long, value_name = "OWNER")]
    pub owner: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides config)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Write the project files into this directory instead of printing them
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides config)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Project id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides config)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

pub fn run_list(args: ProjectsArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let store = open_store(&config, args.db.as_ref())?;
    let owner = args.owner.as_deref().unwrap_or(&config.owner);

    let projects = store.list(owner).context("Failed listing projects")?;
    if projects.is_empty() {
        println!("No projects for {owner}");
        return Ok(());
    }

    println!("{} project(s) for {owner}:", projects.len());
    for project in projects {
        println!(
            "  {}  {:<24}  {} file(s)  updated {}",
            project.id,
            project.name,
            project.files.len(),
            project.updated_at.format("%Y-%m-%d %H:%M")
        );
        if !project.description.is_empty() {
            println!("      {}", project.description);
        }
    }
    Ok(())
}

pub fn run_show(args: ShowArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let store = open_store(&config, args.db.as_ref())?;

    let project =
        store.get(&args.id).with_context(|| format!("Failed loading project {}", args.id))?;

    println!("{}  {}  ({} files)", project.id, project.name, project.files.len());
    if let Some(dir) = &args.out {
        let written = write_files(dir, &project.files)?;
        println!("Wrote {written} file(s) to {}", dir.display());
        return Ok(());
    }

    for file in &project.files {
        println!("\n=== {} [{}] ===", file.name, file.language);
        println!("{}", file.content);
    }
    Ok(())
}

pub fn run_delete(args: DeleteArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let mut store = open_store(&config, args.db.as_ref())?;

    store.delete(&args.id).with_context(|| format!("Failed deleting project {}", args.id))?;
    println!("Deleted project {}", args.id);
    Ok(())
}
