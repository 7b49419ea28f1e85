//! Implementation of `wgo vendor`.
//!
//! Promotes external packages by copying them into the primary gopath's
//! `src` tree. The `vendor` tool is not involved.

use std::ffi::OsString;

use anyhow::Result;

use crate::core::Workspace;
use crate::ops::reconcile::{promote_plan, PromoteStep};
use crate::ops::resolve::resolve_external_packages;
use crate::tools::PackageLister;
use crate::util::fs::copy_dir_atomic;

/// Options for promoting packages into the workspace.
#[derive(Debug, Clone, Default)]
pub struct PromoteOptions {
    /// Packages or patterns to promote dependencies of
    pub targets: Vec<String>,

    /// Caller's `GOPATH`
    pub inherited_gopath: Option<OsString>,
}

/// Copy every external dependency of `targets` into the primary gopath.
///
/// `on_copy` is called with each step before its directory is copied.
/// Destinations that already exist are left untouched, so the operation can
/// be re-run after an interruption. Returns the steps that were applied.
pub fn promote(
    ws: &Workspace,
    lister: &dyn PackageLister,
    opts: &PromoteOptions,
    mut on_copy: impl FnMut(&PromoteStep),
) -> Result<Vec<PromoteStep>> {
    let resolution = resolve_external_packages(
        ws,
        lister,
        &opts.targets,
        opts.inherited_gopath.as_deref(),
    )?;

    let mut applied = Vec::new();
    for step in promote_plan(ws, &resolution) {
        // A parent package copied earlier in this run may already contain it.
        let destination = ws.root().join(&step.destination);
        if destination.exists() {
            tracing::debug!("{} copied with its parent", step.import_path);
            continue;
        }
        on_copy(&step);
        copy_dir_atomic(&step.source, &destination)?;
        applied.push(step);
    }

    tracing::info!(
        "promoted {} packages into {}",
        applied.len(),
        ws.primary_gopath()
    );
    Ok(applied)
}
