//! Resolved packages and their location classification.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::fs::is_inside;

/// Where a resolved package lives relative to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Absolute directory outside the workspace root; a vendoring candidate.
    External,
    /// Already inside the workspace root.
    InWorkspace,
    /// Part of the standard distribution (inside `GOROOT`).
    Standard,
    /// Directory is not absolute and cannot be copied.
    Unrooted,
}

impl Location {
    /// Classify `dir` against the standard distribution root and workspace root.
    pub fn classify(dir: &Path, goroot: &Path, workspace_root: &Path) -> Location {
        if !dir.is_absolute() {
            Location::Unrooted
        } else if is_inside(dir, goroot) {
            Location::Standard
        } else if is_inside(dir, workspace_root) {
            Location::InWorkspace
        } else {
            Location::External
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Location::External => "external",
            Location::InWorkspace => "in-workspace",
            Location::Standard => "standard",
            Location::Unrooted => "unrooted",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package located on disk during one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Import path, unique within a resolution
    pub import_path: String,

    /// Directory backing the import path
    pub dir: PathBuf,

    /// Classification computed once when the entry is created
    pub location: Location,
}

impl PackageEntry {
    /// Create an entry, classifying its directory.
    pub fn new(
        import_path: impl Into<String>,
        dir: impl Into<PathBuf>,
        goroot: &Path,
        workspace_root: &Path,
    ) -> Self {
        let dir = dir.into();
        let location = Location::classify(&dir, goroot, workspace_root);
        PackageEntry {
            import_path: import_path.into(),
            dir,
            location,
        }
    }

    /// Whether this package should be copied into the workspace.
    pub fn is_external(&self) -> bool {
        self.location == Location::External
    }
}
