//! `wgo save` command

use anyhow::Result;

use crate::cli::SaveArgs;
use wgo::ops::{save, SaveOptions};
use wgo::GlobalContext;

pub fn execute(args: SaveArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (godeps, targets) = args.into_parts();

    let opts = SaveOptions {
        targets,
        godeps,
        inherited_gopath: ctx.inherited_gopath().map(|g| g.to_os_string()),
        extra_ignore_dirs: ctx.config().vendor.ignore_dirs.clone(),
        min_vendor_build: ctx.config().min_vendor_build(),
    };

    let result = save(ctx.workspace(), &ctx.go_tool(), &ctx.vendor_tool(), &opts)?;
    eprintln!(
        "       Saved {} packages, {} pinned repositories",
        result.addons, result.pins
    );

    Ok(())
}
