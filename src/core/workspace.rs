//! Workspace - the root directory and its ordered gopaths.
//!
//! A workspace is a directory containing a `.gocfg/` directory. The
//! `.gocfg/gopaths` file lists the workspace's gopaths, one per line,
//! relative to the root. The first gopath is the primary one: promoted
//! packages and the vendor root live there.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Name of the workspace configuration directory.
pub const GOCFG_DIR: &str = ".gocfg";

/// Name of the gopaths file inside `.gocfg/`.
pub const GOPATHS_FILE: &str = "gopaths";

/// A workspace rooted at a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Absolute workspace root
    root: PathBuf,

    /// Gopaths relative to the root, primary first
    gopaths: Vec<String>,
}

impl Workspace {
    /// Create a workspace from an explicit root and gopath list.
    pub fn new(root: impl Into<PathBuf>, gopaths: Vec<String>) -> Self {
        Workspace {
            root: root.into(),
            gopaths,
        }
    }

    /// Load the workspace rooted at `root` from its `.gocfg/gopaths` file.
    ///
    /// A missing gopaths file yields an empty gopath list.
    pub fn load(root: &Path) -> Result<Self> {
        let gocfg = root.join(GOCFG_DIR);
        if !gocfg.is_dir() {
            bail!("`{}` is not a workspace (no {} directory)", root.display(), GOCFG_DIR);
        }

        let gopaths_path = gocfg.join(GOPATHS_FILE);
        let gopaths = if gopaths_path.exists() {
            let contents = std::fs::read_to_string(&gopaths_path)
                .with_context(|| format!("failed to read {}", gopaths_path.display()))?;
            parse_gopaths(&contents)
        } else {
            Vec::new()
        };

        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve workspace root: {}", root.display()))?;

        tracing::debug!("workspace root {} with gopaths {:?}", root.display(), gopaths);
        Ok(Workspace { root, gopaths })
    }

    /// Find the workspace enclosing `cwd` by walking up to the first `.gocfg/`.
    pub fn discover(cwd: &Path) -> Result<Self> {
        let mut current = cwd.to_path_buf();
        loop {
            if current.join(GOCFG_DIR).is_dir() {
                return Self::load(&current);
            }
            if !current.pop() {
                bail!(
                    "could not find a `{}` directory in `{}` or any parent directory\n\
                     \n\
                     Run `wgo init` to create a workspace.",
                    GOCFG_DIR,
                    cwd.display()
                );
            }
        }
    }

    /// Get the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the gopaths, primary first.
    pub fn gopaths(&self) -> &[String] {
        &self.gopaths
    }

    /// The primary gopath, `.` when none is configured.
    pub fn primary_gopath(&self) -> &str {
        self.gopaths.first().map(String::as_str).unwrap_or(".")
    }

    /// Root-relative directory holding vendored packages.
    pub fn vendor_root(&self) -> PathBuf {
        PathBuf::from(self.primary_gopath())
    }

    /// Root-relative source directory of the vendor root.
    pub fn vendor_root_src(&self) -> PathBuf {
        self.vendor_root().join("src")
    }

    /// Absolute workspace gopaths followed by the inherited `GOPATH` entries.
    pub fn search_paths(&self, inherited: Option<&OsStr>) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .gopaths
            .iter()
            .map(|gopath| self.root.join(gopath))
            .collect();

        if let Some(inherited) = inherited {
            for path in std::env::split_paths(inherited) {
                if !path.as_os_str().is_empty() && !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }

        paths
    }

    /// The `GOPATH` value for subprocesses run against this workspace.
    pub fn gopath(&self, inherited: Option<&OsStr>) -> Result<OsString> {
        std::env::join_paths(self.search_paths(inherited))
            .with_context(|| format!("invalid gopath for workspace {}", self.root.display()))
    }
}

/// Parse the contents of a gopaths file.
///
/// Blank lines and `#` comments are ignored.
pub fn parse_gopaths(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
