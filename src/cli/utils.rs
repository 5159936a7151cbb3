//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use codeweave::{Config, FileRecord, SqliteStore};
use std::fs;
use std::path::{Path, PathBuf};

pub fn resolve_config(config_path: Option<&Path>) -> Result<Config> {
    codeweave::load_config(Path::new("."), config_path)
}

pub fn open_store(config: &Config, db_override: Option<&PathBuf>) -> Result<SqliteStore> {
    let path = db_override.cloned().unwrap_or_else(|| config.database_path());
    SqliteStore::open(&path)
        .with_context(|| format!("Failed opening project database: {}", path.display()))
}

/// Write records into `dir`, flattening names to their final path component
/// so a generated filename can never escape the output directory.
pub fn write_files(dir: &Path, files: &[FileRecord]) -> Result<usize> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed creating output directory: {}", dir.display()))?;

    let mut written = 0;
    for file in files {
        let Some(name) = safe_file_name(&file.name) else {
            tracing::warn!(name = %file.name, "skipping file with unusable name");
            continue;
        };
        let path = dir.join(name);
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed writing {}", path.display()))?;
        written += 1;
    }
    Ok(written)
}

fn safe_file_name(name: &str) -> Option<String> {
    let candidate = Path::new(name).file_name()?.to_str()?;
    if candidate == "." || candidate == ".." {
        return None;
    }
    Some(candidate.to_string())
}

pub fn print_files(files: &[FileRecord]) {
    println!("{} file(s):", files.len());
    for file in files {
        println!("  {}  [{}]  {} bytes", file.name, file.language, file.content.len());
    }
}
