//! Implementation of `wgo save`.

use std::ffi::OsString;

use anyhow::Result;

use crate::core::godeps::import_godeps;
use crate::core::Workspace;
use crate::ops::invocation::{VendorInvocation, GOPATH, VENDOR_IGNORE_DIRS};
use crate::ops::probe::{ensure_vendor_available, MIN_VENDOR_BUILD};
use crate::ops::reconcile::{ignore_dirs, join_ignore_dirs, save_mapping};
use crate::ops::resolve::resolve_external_packages;
use crate::tools::{PackageLister, Vendorer};

/// Options for saving dependencies into the vendor root.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Packages or patterns to vendor for, passed to `go list` verbatim
    pub targets: Vec<String>,

    /// Also pin the repositories listed in `Godeps/Godeps.json`
    pub godeps: bool,

    /// Caller's `GOPATH`
    pub inherited_gopath: Option<OsString>,

    /// Directories appended to `VENDOR_IGNORE_DIRS`
    pub extra_ignore_dirs: Vec<String>,

    /// Oldest acceptable `vendor` build
    pub min_vendor_build: u32,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            targets: Vec::new(),
            godeps: false,
            inherited_gopath: None,
            extra_ignore_dirs: Vec::new(),
            min_vendor_build: MIN_VENDOR_BUILD,
        }
    }
}

/// What a save run handed to `vendor`.
#[derive(Debug, Clone)]
pub struct SaveResult {
    /// Number of `-a` addon mappings
    pub addons: usize,

    /// Number of `-r` revision pins
    pub pins: usize,

    /// The invocation that was run
    pub invocation: VendorInvocation,
}

/// Vendor every external dependency of `targets` into the vendor root.
pub fn save(
    ws: &Workspace,
    lister: &dyn PackageLister,
    vendorer: &dyn Vendorer,
    opts: &SaveOptions,
) -> Result<SaveResult> {
    ensure_vendor_available(vendorer, opts.min_vendor_build)?;

    let inherited = opts.inherited_gopath.as_deref();
    let resolution = resolve_external_packages(ws, lister, &opts.targets, inherited)?;
    let mapping = save_mapping(ws, &resolution);

    let pins = if opts.godeps {
        import_godeps(ws)?
    } else {
        Vec::new()
    };

    let ignore = join_ignore_dirs(&ignore_dirs(ws, &opts.extra_ignore_dirs))?;
    let invocation = VendorInvocation::save(&mapping, &pins)
        .with_env(VENDOR_IGNORE_DIRS, ignore)
        .with_env(GOPATH, ws.gopath(inherited)?);

    tracing::info!(
        "vendoring {} external packages and {} pinned repositories into {}",
        mapping.len(),
        pins.len(),
        ws.vendor_root_src().display()
    );
    vendorer.vendor(ws.root(), &invocation)?;

    Ok(SaveResult {
        addons: mapping.len(),
        pins: pins.len(),
        invocation,
    })
}
