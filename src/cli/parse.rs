//! Parse command implementation
//!
//! Runs the extraction cascade over a saved model response. Useful for
//! debugging what a given response would have produced without spending a
//! model call.

use super::utils::{print_files, write_files};
use anyhow::{Context, Result};
use clap::Args;
use codeweave::extract_files;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct ParseArgs {
    /// Response file to parse, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: String,

    /// Write the extracted files into this directory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let raw = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed reading response file: {}", args.input))?
    };

    let files = extract_files(&raw);
    print_files(&files);

    if let Some(dir) = &args.out {
        let written = write_files(dir, &files)?;
        println!("Wrote {written} file(s) to {}", dir.display());
    }

    Ok(())
}
