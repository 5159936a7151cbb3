//! codeweave: generate and iterate on multi-file websites from the terminal.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
