//! `wgo vendor` command

use anyhow::Result;

use crate::cli::VendorArgs;
use wgo::ops::{promote, PromoteOptions};
use wgo::GlobalContext;

pub fn execute(args: VendorArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let opts = PromoteOptions {
        targets: args.targets,
        inherited_gopath: ctx.inherited_gopath().map(|g| g.to_os_string()),
    };

    promote(ctx.workspace(), &ctx.go_tool(), &opts, |step| {
        println!("{}", step.import_path);
    })?;

    Ok(())
}
