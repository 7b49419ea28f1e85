//! `vendor` tool driver.

use std::path::{Path, PathBuf};

use crate::ops::errors::VendorError;
use crate::ops::invocation::VendorInvocation;
use crate::util::process::{resolve_tool, ProcessBuilder};

use super::Vendorer;

/// The external `vendor` executable.
#[derive(Debug, Clone)]
pub struct VendorTool {
    program: PathBuf,
}

impl VendorTool {
    /// Create a driver for the given `vendor` executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        VendorTool {
            program: program.into(),
        }
    }

    /// Use the configured executable, or find `vendor` in PATH.
    pub fn detect(configured: Option<&Path>) -> Self {
        VendorTool::new(resolve_tool(configured, "vendor"))
    }

    /// Get the program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, root: &Path, invocation: &VendorInvocation) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k.clone(), v)))
            .cwd(root)
    }
}

impl Vendorer for VendorTool {
    fn usage_banner(&self) -> String {
        // `vendor` exits non-zero when printing usage; only the text matters.
        match ProcessBuilder::new(&self.program).exec() {
            Ok(output) => String::from_utf8_lossy(&output.stderr).into_owned(),
            Err(e) => {
                tracing::debug!("{}", e);
                String::new()
            }
        }
    }

    fn version_banner(&self) -> String {
        match ProcessBuilder::new(&self.program).arg("-v").exec() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(e) => {
                tracing::debug!("{}", e);
                String::new()
            }
        }
    }

    fn vendor(&self, root: &Path, invocation: &VendorInvocation) -> Result<(), VendorError> {
        self.command(root, invocation).status_and_check()
    }
}
