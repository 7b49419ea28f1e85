//! External tool abstraction.
//!
//! The vendoring core drives two external programs: the Go package
//! lister (`go list`) and the `vendor` tool. Both sit behind traits so
//! the discovery and reconciliation logic can run against scripted fakes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::ops::errors::VendorError;
use crate::ops::invocation::VendorInvocation;

mod go;
mod vendor;

pub use go::GoTool;
pub use vendor::VendorTool;

/// One `go list -e -f <template> <targets...>` request.
#[derive(Debug, Clone, Copy)]
pub struct ListRequest<'a> {
    /// Working directory (the workspace root)
    pub root: &'a Path,
    /// `GOPATH` value for the child process
    pub gopath: &'a OsStr,
    /// Output template passed to `-f`
    pub template: &'a str,
    /// Packages or patterns to list
    pub targets: &'a [String],
}

/// Lists packages and reports the standard distribution root.
pub trait PackageLister {
    /// Run a listing and return its stdout.
    fn list(&self, request: &ListRequest<'_>) -> Result<String, VendorError>;

    /// The standard distribution root (`GOROOT`).
    fn goroot(&self, gopath: &OsStr) -> Result<PathBuf, VendorError>;
}

/// Runs the external `vendor` tool.
pub trait Vendorer {
    /// Stderr of a bare `vendor` run; empty if it could not be started.
    fn usage_banner(&self) -> String;

    /// Stdout of `vendor -v`; empty if it could not be started.
    fn version_banner(&self) -> String;

    /// Run `vendor` in `root` with the given invocation.
    fn vendor(&self, root: &Path, invocation: &VendorInvocation) -> Result<(), VendorError>;
}
