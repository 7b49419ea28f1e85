//! `go` command driver.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::ops::errors::VendorError;
use crate::ops::invocation::GOPATH;
use crate::util::process::{resolve_tool, ProcessBuilder};

use super::{ListRequest, PackageLister};

/// The Go toolchain's `go` command.
#[derive(Debug, Clone)]
pub struct GoTool {
    program: PathBuf,
}

impl GoTool {
    /// Create a driver for the given `go` executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        GoTool {
            program: program.into(),
        }
    }

    /// Use the configured executable, or find `go` in PATH.
    pub fn detect(configured: Option<&Path>) -> Self {
        GoTool::new(resolve_tool(configured, "go"))
    }

    /// Get the program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn list_command(&self, request: &ListRequest<'_>) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(["list", "-e", "-f", request.template])
            .args(request.targets)
            .cwd(request.root)
            .env(GOPATH, request.gopath)
    }
}

impl PackageLister for GoTool {
    fn list(&self, request: &ListRequest<'_>) -> Result<String, VendorError> {
        let output = self.list_command(request).exec_and_check()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn goroot(&self, gopath: &OsStr) -> Result<PathBuf, VendorError> {
        let output = ProcessBuilder::new(&self.program)
            .args(["env", "GOROOT"])
            .env(GOPATH, gopath)
            .exec_and_check()?;
        let goroot = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(PathBuf::from(goroot))
    }
}
