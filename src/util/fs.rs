//! Filesystem utilities.

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Recursively copy a directory.
///
/// Symlinks are copied as the files they point to.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create directory: {}", dst.display()))?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("unexpected path: {}", entry.path().display()))?;
        let dst_path = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path).with_context(|| {
                format!("failed to create directory: {}", dst_path.display())
            })?;
        } else {
            fs::copy(entry.path(), &dst_path).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    entry.path().display(),
                    dst_path.display()
                )
            })?;
        }
    }
    Ok(())
}

/// Copy `src` to `dst` through a temporary sibling directory.
///
/// `dst` only appears once the whole tree has been copied, so an
/// interrupted copy never leaves a partially populated destination.
pub fn copy_dir_atomic(src: &Path, dst: &Path) -> Result<()> {
    let parent = dst
        .parent()
        .with_context(|| format!("destination has no parent: {}", dst.display()))?;
    ensure_dir(parent)?;

    let staging = tempfile::Builder::new()
        .prefix(".wgo-copy-")
        .tempdir_in(parent)
        .with_context(|| format!("failed to create staging directory in {}", parent.display()))?;
    let staged = staging.path().join("pkg");

    copy_dir_all(src, &staged)?;
    fs::rename(&staged, dst)
        .with_context(|| format!("failed to move copy into place: {}", dst.display()))?;
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Check if `path` is `parent` or lies beneath it.
///
/// The relative path from `parent` must not climb out through `..`.
pub fn is_inside(path: &Path, parent: &Path) -> bool {
    match pathdiff::diff_paths(path, parent) {
        Some(rel) => !matches!(rel.components().next(), Some(Component::ParentDir)),
        None => false,
    }
}
