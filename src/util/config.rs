//! Configuration file support for wgo.
//!
//! wgo reads two configuration files:
//! - Global: `~/.wgo/config.toml` - User-wide defaults
//! - Project: `.gocfg/config.toml` - Workspace-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::workspace::GOCFG_DIR;
use crate::ops::probe::MIN_VENDOR_BUILD;

/// wgo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,

    /// Vendoring settings
    pub vendor: VendorConfig,
}

/// Paths to the external tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to the `go` command (default: found in PATH)
    pub go: Option<PathBuf>,

    /// Path to the `vendor` command (default: found in PATH)
    pub vendor: Option<PathBuf>,
}

/// Vendoring settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorConfig {
    /// Oldest acceptable `vendor` build
    pub min_build: Option<u32>,

    /// Extra directories for `VENDOR_IGNORE_DIRS`
    pub ignore_dirs: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.tools.go.is_some() {
            self.tools.go = other.tools.go;
        }
        if other.tools.vendor.is_some() {
            self.tools.vendor = other.tools.vendor;
        }
        if other.vendor.min_build.is_some() {
            self.vendor.min_build = other.vendor.min_build;
        }
        if !other.vendor.ignore_dirs.is_empty() {
            self.vendor.ignore_dirs = other.vendor.ignore_dirs;
        }
    }

    /// The oldest acceptable `vendor` build.
    pub fn min_vendor_build(&self) -> u32 {
        self.vendor.min_build.unwrap_or(MIN_VENDOR_BUILD)
    }
}

/// Get the global wgo config directory (~/.wgo).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".wgo"))
}

/// Get the global config path (~/.wgo/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.gocfg/config.toml).
pub fn project_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(GOCFG_DIR).join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.gocfg/config.toml)
/// 2. Global config (~/.wgo/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Load the configuration that applies to the workspace at `workspace_root`.
pub fn load_workspace_config(workspace_root: &Path) -> Config {
    let global = global_config_path();
    load_config(global.as_deref(), &project_config_path(workspace_root))
}
