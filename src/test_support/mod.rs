//! Test utilities and fakes for wgo unit tests.
//!
//! Provides scripted stand-ins for the external `go` and `vendor` tools so
//! discovery and reconciliation can be tested without either installed.
//!
//! # Example
//!
//! ```rust,ignore
//! use wgo::test_support::{GoFixture, MockLister, MockProcessOutput};
//!
//! #[test]
//! fn test_example() {
//!     let fx = GoFixture::new();
//!     fx.add_external_package("example.com/dep");
//!
//!     let lister = MockLister::new(fx.goroot())
//!         .with_deps(MockProcessOutput::success("example.com/dep\n"));
//!
//!     // Resolve against fx.workspace()...
//! }
//! ```

pub mod fixtures;

use std::cell::RefCell;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::ops::errors::VendorError;
use crate::ops::invocation::VendorInvocation;
use crate::ops::resolve::{DEPS_TEMPLATE, TEST_IMPORTS_TEMPLATE};
use crate::tools::{ListRequest, PackageLister, Vendorer};

pub use fixtures::*;

/// Mock process output for scripted tool runs.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Check if the process succeeded.
    pub fn success_status(&self) -> bool {
        self.status == 0
    }

    fn into_result(self, command: String) -> Result<String, VendorError> {
        if self.success_status() {
            Ok(self.stdout)
        } else {
            Err(VendorError::SubprocessFailure {
                command,
                exit_code: Some(self.status),
                stderr: self.stderr,
            })
        }
    }
}

impl Default for MockProcessOutput {
    fn default() -> Self {
        MockProcessOutput::success("")
    }
}

/// A recorded `go list` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub root: PathBuf,
    pub gopath: OsString,
    pub template: String,
    pub targets: Vec<String>,
}

/// Scripted `go list` stand-in.
///
/// Answers the test-imports and dependency listings with fixed outputs and
/// records every request.
#[derive(Debug, Default)]
pub struct MockLister {
    goroot: PathBuf,
    test_imports: MockProcessOutput,
    deps: MockProcessOutput,
    calls: RefCell<Vec<ListCall>>,
}

impl MockLister {
    /// Create a lister reporting `goroot` with empty listings.
    pub fn new(goroot: impl Into<PathBuf>) -> Self {
        MockLister {
            goroot: goroot.into(),
            ..Default::default()
        }
    }

    /// Output for the test-imports listing.
    pub fn with_test_imports(mut self, output: MockProcessOutput) -> Self {
        self.test_imports = output;
        self
    }

    /// Output for the dependency-closure listing.
    pub fn with_deps(mut self, output: MockProcessOutput) -> Self {
        self.deps = output;
        self
    }

    /// Get all requests that were made.
    pub fn calls(&self) -> Vec<ListCall> {
        self.calls.borrow().clone()
    }
}

impl PackageLister for MockLister {
    fn list(&self, request: &ListRequest<'_>) -> Result<String, VendorError> {
        self.calls.borrow_mut().push(ListCall {
            root: request.root.to_path_buf(),
            gopath: request.gopath.to_os_string(),
            template: request.template.to_string(),
            targets: request.targets.to_vec(),
        });

        let command = format!("go list -e -f {} {}", request.template, request.targets.join(" "));
        match request.template {
            TEST_IMPORTS_TEMPLATE => self.test_imports.clone().into_result(command),
            DEPS_TEMPLATE => self.deps.clone().into_result(command),
            _ => MockProcessOutput::failure(2, "unexpected template").into_result(command),
        }
    }

    fn goroot(&self, _gopath: &OsStr) -> Result<PathBuf, VendorError> {
        Ok(self.goroot.clone())
    }
}

/// Scripted `vendor` stand-in that records invocations.
#[derive(Debug, Default)]
pub struct MockVendorer {
    usage: String,
    version: String,
    exit_status: i32,
    invocations: RefCell<Vec<(PathBuf, VendorInvocation)>>,
}

impl MockVendorer {
    /// An installed `vendor` reporting the given build number.
    pub fn installed(build: u32) -> Self {
        MockVendorer {
            usage: "Usage: vendor [-x] [-s] [-r] [-a dest=src]...\n".to_string(),
            version: format!("vendor build {} (mock)\n", build),
            ..Default::default()
        }
    }

    /// A `vendor` that could not be started.
    pub fn missing() -> Self {
        MockVendorer::default()
    }

    /// Make every vendoring run exit with `status`.
    pub fn failing(mut self, status: i32) -> Self {
        self.exit_status = status;
        self
    }

    /// Get all recorded runs as (working directory, invocation).
    pub fn invocations(&self) -> Vec<(PathBuf, VendorInvocation)> {
        self.invocations.borrow().clone()
    }
}

impl Vendorer for MockVendorer {
    fn usage_banner(&self) -> String {
        self.usage.clone()
    }

    fn version_banner(&self) -> String {
        self.version.clone()
    }

    fn vendor(&self, root: &Path, invocation: &VendorInvocation) -> Result<(), VendorError> {
        self.invocations
            .borrow_mut()
            .push((root.to_path_buf(), invocation.clone()));

        let output = MockProcessOutput {
            status: self.exit_status,
            ..Default::default()
        };
        output
            .into_result(format!("vendor {}", invocation.args.join(" ")))
            .map(|_| ())
    }
}
