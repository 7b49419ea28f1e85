//! Destination paths for resolved packages.
//!
//! Save mode maps external packages into the vendor root for the `vendor`
//! tool. Promote mode plans direct copies into the primary gopath.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Workspace;
use crate::ops::resolve::Resolution;

/// Directories `vendor` always skips, before the per-gopath entries.
pub const FIXED_IGNORE_DIRS: [&str; 3] = [".git", ".hg", ".gocfg"];

/// Map `<vendor root>/src/<import path>` to the source directory of every
/// external package.
pub fn save_mapping(ws: &Workspace, resolution: &Resolution) -> BTreeMap<PathBuf, PathBuf> {
    let vendor_src = ws.vendor_root_src();
    resolution
        .external()
        .map(|pkg| (vendor_src.join(&pkg.import_path), pkg.dir.clone()))
        .collect()
}

/// Directories `vendor` must not scan: VCS metadata, `.gocfg`, each
/// gopath's `pkg` and `bin`, then `extra`.
pub fn ignore_dirs(ws: &Workspace, extra: &[String]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = FIXED_IGNORE_DIRS.iter().map(PathBuf::from).collect();
    for gopath in ws.gopaths() {
        dirs.push(Path::new(gopath).join("pkg"));
        dirs.push(Path::new(gopath).join("bin"));
    }
    dirs.extend(extra.iter().map(PathBuf::from));
    dirs
}

/// Join ignore directories with the platform path-list separator.
pub fn join_ignore_dirs(dirs: &[PathBuf]) -> Result<OsString> {
    std::env::join_paths(dirs).context("ignore directory contains a path separator")
}

/// One package to copy into the primary gopath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoteStep {
    /// Import path being promoted
    pub import_path: String,

    /// Absolute source directory
    pub source: PathBuf,

    /// Root-relative destination directory
    pub destination: PathBuf,
}

/// Plan copies of external packages into `<primary gopath>/src/<import path>`.
///
/// Packages whose destination already exists are skipped, so applying the
/// plan twice copies nothing the second time.
pub fn promote_plan(ws: &Workspace, resolution: &Resolution) -> Vec<PromoteStep> {
    let src = Path::new(ws.primary_gopath()).join("src");
    resolution
        .external()
        .filter_map(|pkg| {
            let destination = src.join(&pkg.import_path);
            if ws.root().join(&destination).exists() {
                tracing::debug!("{} already present at {}", pkg.import_path, destination.display());
                return None;
            }
            Some(PromoteStep {
                import_path: pkg.import_path.clone(),
                source: pkg.dir.clone(),
                destination,
            })
        })
        .collect()
}
