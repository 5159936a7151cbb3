//! Generate command implementation

use super::utils::{open_store, print_files, resolve_config, write_files};
use anyhow::{Context, Result};
use clap::Args;
use codeweave::{ChatCompletionsClient, CommitOutcome, MemoryStore, ProjectStore, Session};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct GenerateArgs {
    /// Natural-language description of the website or of the change to make
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Existing project id to modify (omit to start a new project)
    #[arg(short, long, value_name = "ID")]
    pub project: Option<String>,

    /// Directory the generated files are written into
    #[arg(short, long, value_name = "DIR", default_value = "site")]
    pub out: PathBuf,

    /// Save a new project under this name without prompting
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Description stored alongside --name
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Skip persistence entirely (in-memory run)
    #[arg(long)]
    pub ephemeral: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides config)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;

    if args.ephemeral && args.project.is_some() {
        anyhow::bail!("Cannot combine --ephemeral with --project");
    }

    let client = ChatCompletionsClient::from_config(&config)
        .context("Model client is not usable; check your token configuration")?;

    let store: Box<dyn ProjectStore> = if args.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(open_store(&config, args.db.as_ref())?)
    };

    let profile = config.prompt.clone();
    let mut session = Session::new(client, store, profile, config.owner.clone());

    if let Some(project_id) = &args.project {
        session
            .load(project_id)
            .with_context(|| format!("Failed loading project {project_id}"))?;
        println!("Modifying project {project_id} ({} files)", session.files().len());
    }

    let spinner = progress_spinner(&config.model);
    let outcome = session.generate(&args.prompt);
    spinner.finish_and_clear();
    let outcome = outcome.context("Generation cycle failed; the previous files are unchanged")?;

    print_files(session.files());
    let written = write_files(&args.out, session.files())?;
    println!("Wrote {written} file(s) to {}", args.out.display());

    match outcome {
        CommitOutcome::AutoSaved => {
            // load() above guarantees the id is present on this path.
            if let Some(id) = session.project_id() {
                println!("Project {id} auto-saved");
            }
        }
        CommitOutcome::NeedsName if args.ephemeral => {
            println!("Ephemeral run: project not persisted");
        }
        CommitOutcome::NeedsName => save_new_project(&mut session, &args)?,
    }

    Ok(())
}

fn save_new_project(
    session: &mut Session<ChatCompletionsClient, Box<dyn ProjectStore>>,
    args: &GenerateArgs,
) -> Result<()> {
    let (name, description) = match &args.name {
        Some(name) => (name.clone(), args.description.clone()),
        None if std::io::stdin().is_terminal() => {
            let name: String = dialoguer::Input::new()
                .with_prompt("Project name (empty to skip saving)")
                .allow_empty(true)
                .interact_text()
                .context("Failed reading project name")?;
            if name.trim().is_empty() {
                println!("Not saved; re-run with --name to persist");
                return Ok(());
            }
            let description: String = dialoguer::Input::new()
                .with_prompt("Description")
                .allow_empty(true)
                .interact_text()
                .context("Failed reading project description")?;
            (name, description)
        }
        None => {
            println!("Not saved; re-run with --name to persist");
            return Ok(());
        }
    };

    let id = session
        .save_as(name.trim(), description.trim())
        .context("Saving the project failed; the generated files are still on disk")?;
    println!("Saved project {id} as \"{}\"", name.trim());
    Ok(())
}

fn progress_spinner(model: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("Generating with {model}..."));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
