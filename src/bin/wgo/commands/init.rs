//! `wgo init` command

use anyhow::{Context, Result};

use crate::cli::InitArgs;
use wgo::ops::init_workspace;

pub fn execute(args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let ws = init_workspace(&path, &args.gopaths)?;
    eprintln!(
        "     Created workspace at {} (gopaths: {})",
        ws.root().display(),
        ws.gopaths().join(", ")
    );

    Ok(())
}
