//! Package discovery.
//!
//! Lists the test imports and transitive dependencies of the requested
//! targets plus every package in the workspace gopaths, then locates each
//! import path on disk and classifies where it lives.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::package::{Location, PackageEntry};
use crate::core::Workspace;
use crate::ops::errors::VendorError;
use crate::tools::{ListRequest, PackageLister};

/// `go list` template printing each target's test imports.
pub const TEST_IMPORTS_TEMPLATE: &str = "{{range .TestImports}}{{.}}\n{{end}}";

/// `go list` template printing each target and its dependency closure.
pub const DEPS_TEMPLATE: &str = "{{.ImportPath}}\n{{range .Deps}}{{.}}\n{{end}}";

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Located packages outside the standard distribution, by import path
    pub packages: BTreeMap<String, PackageEntry>,

    /// Import paths that could not be located
    pub unresolved: Vec<String>,
}

impl Resolution {
    /// Look up a package by import path.
    pub fn get(&self, import_path: &str) -> Option<&PackageEntry> {
        self.packages.get(import_path)
    }

    /// Packages living outside the workspace root.
    pub fn external(&self) -> impl Iterator<Item = &PackageEntry> {
        self.packages.values().filter(|p| p.is_external())
    }
}

/// Finds the directory backing an import path without reading it.
///
/// `GOROOT/src` is searched first, then `src` under each search path.
#[derive(Debug, Clone)]
pub struct SourceLocator {
    goroot: PathBuf,
    search_paths: Vec<PathBuf>,
}

impl SourceLocator {
    /// Create a locator over a standard root and ordered search paths.
    pub fn new(goroot: impl Into<PathBuf>, search_paths: Vec<PathBuf>) -> Self {
        SourceLocator {
            goroot: goroot.into(),
            search_paths,
        }
    }

    /// Locate `import_path`.
    pub fn find(&self, import_path: &str) -> Result<PathBuf, VendorError> {
        let unresolvable = || VendorError::UnresolvablePackage {
            import_path: import_path.to_string(),
        };

        if !is_locatable(import_path) {
            return Err(unresolvable());
        }

        std::iter::once(&self.goroot)
            .chain(&self.search_paths)
            .map(|base| base.join("src").join(import_path))
            .find(|dir| dir.is_dir())
            .ok_or_else(unresolvable)
    }
}

/// Local, pseudo and empty import paths have no source directory.
fn is_locatable(import_path: &str) -> bool {
    !(import_path.is_empty()
        || import_path == "C"
        || import_path.starts_with('.')
        || import_path.starts_with('/')
        || import_path.starts_with("_/"))
}

/// Resolve every package reachable from `targets` and the workspace gopaths.
///
/// `inherited_gopath` is the caller's `GOPATH`; its entries are searched after
/// the workspace gopaths. The listing tool sees the combined value through its
/// own environment only.
pub fn resolve_external_packages(
    ws: &Workspace,
    lister: &dyn PackageLister,
    targets: &[String],
    inherited_gopath: Option<&OsStr>,
) -> Result<Resolution> {
    let gopath = ws.gopath(inherited_gopath)?;

    let mut targets = Targets::new(targets);
    for gp in ws.gopaths() {
        targets.push(format!("./{}/src/...", gp));
    }

    let test_imports = lister.list(&ListRequest {
        root: ws.root(),
        gopath: &gopath,
        template: TEST_IMPORTS_TEMPLATE,
        targets: targets.as_slice(),
    })?;
    for import_path in non_empty_lines(&test_imports) {
        targets.push(import_path.to_string());
    }

    let deps = lister.list(&ListRequest {
        root: ws.root(),
        gopath: &gopath,
        template: DEPS_TEMPLATE,
        targets: targets.as_slice(),
    })?;
    let candidates: BTreeSet<&str> = non_empty_lines(&deps).collect();
    tracing::debug!(
        "{} targets expanded to {} candidate packages",
        targets.len(),
        candidates.len()
    );

    let goroot = lister.goroot(&gopath)?;
    if !goroot.is_absolute() {
        return Err(VendorError::SubprocessFailure {
            command: "go env GOROOT".to_string(),
            exit_code: None,
            stderr: format!("unusable GOROOT `{}`", goroot.display()),
        }
        .into());
    }
    let locator = SourceLocator::new(&goroot, ws.search_paths(inherited_gopath));

    let mut resolution = Resolution::default();
    let mut standard = 0usize;
    for import_path in candidates {
        let dir = match locator.find(import_path) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::debug!("{}", e);
                resolution.unresolved.push(import_path.to_string());
                continue;
            }
        };

        let entry = PackageEntry::new(import_path, dir, &goroot, ws.root());
        if entry.location == Location::Standard {
            standard += 1;
            continue;
        }

        tracing::debug!("{} ({}) -> {}", entry.import_path, entry.location, entry.dir.display());
        resolution.packages.insert(entry.import_path.clone(), entry);
    }

    tracing::info!(
        "resolved {} packages ({} external, {} standard skipped, {} unresolved)",
        resolution.packages.len(),
        resolution.external().count(),
        standard,
        resolution.unresolved.len()
    );

    Ok(resolution)
}

fn non_empty_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Ordered target list without duplicates.
struct Targets {
    list: Vec<String>,
    seen: BTreeSet<String>,
}

impl Targets {
    fn new(initial: &[String]) -> Self {
        let mut targets = Targets {
            list: Vec::new(),
            seen: BTreeSet::new(),
        };
        for target in initial {
            targets.push(target.clone());
        }
        targets
    }

    fn push(&mut self, target: String) {
        if self.seen.insert(target.clone()) {
            self.list.push(target);
        }
    }

    fn as_slice(&self) -> &[String] {
        &self.list
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}
