//! Implementation of `wgo init`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::workspace::{GOCFG_DIR, GOPATHS_FILE};
use crate::core::Workspace;

/// Create a workspace at `path` with the given gopaths (`.` when empty).
pub fn init_workspace(path: &Path, gopaths: &[String]) -> Result<Workspace> {
    let gocfg = path.join(GOCFG_DIR);
    if gocfg.exists() {
        bail!("`{}` is already a workspace", path.display());
    }

    let gopaths: Vec<String> = if gopaths.is_empty() {
        vec![".".to_string()]
    } else {
        gopaths.to_vec()
    };

    for gopath in &gopaths {
        if Path::new(gopath).is_absolute() {
            bail!("gopath `{}` must be relative to the workspace root", gopath);
        }
    }

    fs::create_dir_all(&gocfg)
        .with_context(|| format!("failed to create directory: {}", gocfg.display()))?;

    let mut contents = gopaths.join("\n");
    contents.push('\n');
    fs::write(gocfg.join(GOPATHS_FILE), contents)
        .with_context(|| format!("failed to write {}/{}", GOCFG_DIR, GOPATHS_FILE))?;

    for gopath in &gopaths {
        let src = path.join(gopath).join("src");
        fs::create_dir_all(&src)
            .with_context(|| format!("failed to create directory: {}", src.display()))?;
    }

    Workspace::load(path)
}
