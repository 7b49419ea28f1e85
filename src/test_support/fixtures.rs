//! On-disk fixtures for resolution tests.
//!
//! A [`GoFixture`] lays out a temporary standard distribution, an external
//! gopath and a workspace side by side:
//!
//! ```text
//! <tmp>/goroot/src/...
//! <tmp>/gocode/src/...
//! <tmp>/ws/.gocfg/gopaths      ("go")
//! <tmp>/ws/go/src/...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::workspace::{GOCFG_DIR, GOPATHS_FILE};
use crate::core::Workspace;

/// Temporary Go tree with a standard root, an external gopath and a workspace.
#[derive(Debug)]
pub struct GoFixture {
    _tmp: TempDir,
    base: PathBuf,
}

impl GoFixture {
    /// Create a fixture whose workspace has the single gopath `go`.
    pub fn new() -> Self {
        Self::with_gopaths(&["go"])
    }

    /// Create a fixture whose workspace lists `gopaths`.
    pub fn with_gopaths(gopaths: &[&str]) -> Self {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().canonicalize().unwrap();

        fs::create_dir_all(base.join("goroot/src")).unwrap();
        fs::create_dir_all(base.join("gocode/src")).unwrap();
        fs::create_dir_all(base.join("ws").join(GOCFG_DIR)).unwrap();
        fs::write(
            base.join("ws").join(GOCFG_DIR).join(GOPATHS_FILE),
            gopaths.join("\n"),
        )
        .unwrap();
        for gopath in gopaths {
            fs::create_dir_all(base.join("ws").join(gopath).join("src")).unwrap();
        }

        GoFixture { _tmp: tmp, base }
    }

    /// The standard distribution root.
    pub fn goroot(&self) -> PathBuf {
        self.base.join("goroot")
    }

    /// The gopath outside the workspace.
    pub fn external_gopath(&self) -> PathBuf {
        self.base.join("gocode")
    }

    /// The workspace root.
    pub fn root(&self) -> PathBuf {
        self.base.join("ws")
    }

    /// Load the workspace.
    pub fn workspace(&self) -> Workspace {
        Workspace::load(&self.root()).unwrap()
    }

    /// Add a package to the standard distribution.
    pub fn add_goroot_package(&self, import_path: &str) -> PathBuf {
        add_package(&self.goroot(), import_path)
    }

    /// Add a package to the external gopath.
    pub fn add_external_package(&self, import_path: &str) -> PathBuf {
        add_package(&self.external_gopath(), import_path)
    }

    /// Add a package to one of the workspace gopaths.
    pub fn add_workspace_package(&self, gopath: &str, import_path: &str) -> PathBuf {
        add_package(&self.root().join(gopath), import_path)
    }
}

impl Default for GoFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn add_package(gopath: &Path, import_path: &str) -> PathBuf {
    let dir = gopath.join("src").join(import_path);
    fs::create_dir_all(&dir).unwrap();
    let name = import_path.rsplit('/').next().unwrap_or(import_path);
    fs::write(dir.join(format!("{}.go", name)), format!("package {}\n", name)).unwrap();
    dir
}
