//! Implementation of `wgo restore`.

use std::ffi::OsString;

use anyhow::Result;

use crate::core::Workspace;
use crate::ops::invocation::{VendorInvocation, GOPATH};
use crate::ops::probe::{ensure_vendor_available, MIN_VENDOR_BUILD};
use crate::tools::Vendorer;

/// Options for restoring the vendor root.
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    /// Caller's `GOPATH`
    pub inherited_gopath: Option<OsString>,

    /// Oldest acceptable `vendor` build
    pub min_vendor_build: u32,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        RestoreOptions {
            inherited_gopath: None,
            min_vendor_build: MIN_VENDOR_BUILD,
        }
    }
}

/// Have `vendor` restore every pinned dependency recorded in the vendor root.
pub fn restore(ws: &Workspace, vendorer: &dyn Vendorer, opts: &RestoreOptions) -> Result<()> {
    ensure_vendor_available(vendorer, opts.min_vendor_build)?;

    let invocation = VendorInvocation::restore()
        .with_env(GOPATH, ws.gopath(opts.inherited_gopath.as_deref())?);
    vendorer.vendor(ws.root(), &invocation)?;
    Ok(())
}
