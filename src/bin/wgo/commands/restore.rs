//! `wgo restore` command

use anyhow::Result;

use crate::cli::RestoreArgs;
use wgo::ops::{restore, RestoreOptions};
use wgo::GlobalContext;

pub fn execute(_args: RestoreArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let opts = RestoreOptions {
        inherited_gopath: ctx.inherited_gopath().map(|g| g.to_os_string()),
        min_vendor_build: ctx.config().min_vendor_build(),
    };

    restore(ctx.workspace(), &ctx.vendor_tool(), &opts)
}
