//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// wgo - workspace-aware dependency vendoring for Go
#[derive(Parser)]
#[command(name = "wgo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a workspace in an existing directory
    Init(InitArgs),

    /// Vendor external dependencies into the vendor root using `vendor`
    Save(SaveArgs),

    /// Copy external dependencies into the primary gopath
    Vendor(VendorArgs),

    /// Restore vendored dependencies using `vendor`
    Restore(RestoreArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Gopaths relative to the workspace root (defaults to `.`)
    pub gopaths: Vec<String>,

    /// Directory to initialize (defaults to current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct SaveArgs {
    /// Also pin repositories listed in Godeps/Godeps.json
    #[arg(long)]
    pub godeps: bool,

    /// Packages or patterns passed to `go list`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub targets: Vec<String>,
}

impl SaveArgs {
    /// Split `--godeps` out of the targets; it may follow them.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        let (flags, targets): (Vec<String>, Vec<String>) =
            self.targets.into_iter().partition(|t| t == "--godeps");
        (self.godeps || !flags.is_empty(), targets)
    }
}

#[derive(Args)]
pub struct VendorArgs {
    /// Packages or patterns passed to `go list`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub targets: Vec<String>,
}

#[derive(Args)]
pub struct RestoreArgs {}
