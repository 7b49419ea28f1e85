//! Command-line construction for the external `vendor` tool.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::godeps::LegacyDependency;

/// Environment variable carrying the directories `vendor` must skip.
pub const VENDOR_IGNORE_DIRS: &str = "VENDOR_IGNORE_DIRS";

/// Environment variable carrying the dependency search path.
pub const GOPATH: &str = "GOPATH";

/// Arguments and environment for one `vendor` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorInvocation {
    /// Arguments after the program name
    pub args: Vec<String>,

    /// Environment entries set on the child process
    pub env: Vec<(String, OsString)>,
}

impl VendorInvocation {
    /// `wgo vendor -x -s` with one `-a dest=src` per mapping entry and one
    /// `-r<kind> root=repo@rev` per legacy pin.
    pub fn save(mapping: &BTreeMap<PathBuf, PathBuf>, pins: &[LegacyDependency]) -> Self {
        let mut args = base_args();
        args.extend(["-x".to_string(), "-s".to_string()]);

        for (destination, dir) in mapping {
            args.push("-a".to_string());
            args.push(format!("{}={}", destination.display(), dir.display()));
        }

        for pin in pins {
            args.push(format!("-r{}", pin.kind));
            args.push(pin.revision_arg());
        }

        VendorInvocation {
            args,
            env: Vec::new(),
        }
    }

    /// `wgo vendor -r`: restore from the manifest the vendor root already holds.
    pub fn restore() -> Self {
        let mut args = base_args();
        args.push("-r".to_string());
        VendorInvocation {
            args,
            env: Vec::new(),
        }
    }

    /// Add an environment entry.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Look up an environment entry.
    pub fn env_value(&self, key: &str) -> Option<&OsString> {
        self.env.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

fn base_args() -> Vec<String> {
    vec!["wgo".to_string(), "vendor".to_string()]
}
