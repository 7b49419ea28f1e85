//! Legacy `Godeps/Godeps.json` import.
//!
//! Each pinned dependency becomes a `(root, repo, rev, kind)` record that
//! `vendor` can check out at the recorded revision. Dependencies sharing a
//! repository root collapse into one record.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::Workspace;

/// Location of the legacy manifest relative to the workspace root.
pub const GODEPS_MANIFEST: &str = "Godeps/Godeps.json";

/// Version-control systems understood by `vendor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    Git,
    Hg,
    Bzr,
}

impl VcsKind {
    fn from_suffix(segment: &str) -> Option<VcsKind> {
        if segment.ends_with(".git") {
            Some(VcsKind::Git)
        } else if segment.ends_with(".hg") {
            Some(VcsKind::Hg)
        } else if segment.ends_with(".bzr") {
            Some(VcsKind::Bzr)
        } else {
            None
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsKind::Git => write!(f, "git"),
            VcsKind::Hg => write!(f, "hg"),
            VcsKind::Bzr => write!(f, "bzr"),
        }
    }
}

/// A repository pinned to a revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyDependency {
    /// Root-relative checkout directory inside the vendor root
    pub root: PathBuf,

    /// Repository URL
    pub repo: String,

    /// Pinned revision
    pub rev: String,

    /// Version-control system
    pub kind: VcsKind,
}

impl LegacyDependency {
    /// The `root=repo@rev` argument passed after `-r<kind>`.
    pub fn revision_arg(&self) -> String {
        format!("{}={}@{}", self.root.display(), self.repo, self.rev)
    }
}

/// Repository coordinates derived from an import path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    /// Import path prefix naming the repository root
    pub root: String,

    /// Repository URL
    pub repo: String,

    /// Version-control system
    pub kind: VcsKind,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GodepsManifest {
    #[serde(default)]
    deps: Vec<GodepsEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GodepsEntry {
    import_path: String,
    rev: String,
}

/// Derive the repository root of an import path from well-known hosts or an
/// explicit `.git`/`.hg`/`.bzr` qualifier.
pub fn repo_root(import_path: &str) -> Option<RepoRoot> {
    let segments: Vec<&str> = import_path.split('/').collect();
    let prefix = |n: usize| segments[..n].join("/");

    let (root, repo, kind) = match segments.as_slice() {
        ["github.com" | "bitbucket.org" | "gitlab.com", _, _, ..] => {
            let root = prefix(3);
            (root.clone(), format!("https://{}", root), VcsKind::Git)
        }
        ["golang.org", "x", name, ..] => (
            prefix(3),
            format!("https://go.googlesource.com/{}", name),
            VcsKind::Git,
        ),
        ["code.google.com", "p", name, ..] => (
            prefix(3),
            format!("https://code.google.com/p/{}", name),
            VcsKind::Hg,
        ),
        ["gopkg.in", pkg, ..] if pkg.contains(".v") => {
            let root = prefix(2);
            (root.clone(), format!("https://{}", root), VcsKind::Git)
        }
        ["gopkg.in", _, _, ..] => {
            let root = prefix(3);
            (root.clone(), format!("https://{}", root), VcsKind::Git)
        }
        _ => {
            let (idx, kind) = segments
                .iter()
                .enumerate()
                .skip(1)
                .find_map(|(i, s)| VcsKind::from_suffix(s).map(|k| (i, k)))?;
            let root = prefix(idx + 1);
            (root.clone(), format!("https://{}", root), kind)
        }
    };

    Some(RepoRoot { root, repo, kind })
}

/// Read `Godeps/Godeps.json` from the workspace root and convert it into
/// revision pins rooted in the vendor root.
pub fn import_godeps(ws: &Workspace) -> Result<Vec<LegacyDependency>> {
    let path = ws.root().join(GODEPS_MANIFEST);
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_godeps(&contents, &ws.vendor_root_src())
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Convert Godeps manifest contents into revision pins under `vendor_src`.
pub fn parse_godeps(contents: &str, vendor_src: &Path) -> Result<Vec<LegacyDependency>> {
    let manifest: GodepsManifest = serde_json::from_str(contents)?;

    let mut pins: BTreeMap<String, LegacyDependency> = BTreeMap::new();
    for dep in manifest.deps {
        let Some(repo) = repo_root(&dep.import_path) else {
            tracing::warn!(
                "skipping `{}`: cannot determine its repository root",
                dep.import_path
            );
            continue;
        };

        if let Some(existing) = pins.get(&repo.root) {
            if existing.rev != dep.rev {
                tracing::warn!(
                    "`{}` is pinned at both {} and {}; keeping {}",
                    repo.root,
                    existing.rev,
                    dep.rev,
                    existing.rev
                );
            }
            continue;
        }

        pins.insert(
            repo.root.clone(),
            LegacyDependency {
                root: vendor_src.join(&repo.root),
                repo: repo.repo,
                rev: dep.rev,
                kind: repo.kind,
            },
        );
    }

    Ok(pins.into_values().collect())
}
