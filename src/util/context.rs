//! Global context for wgo operations.
//!
//! Provides centralized access to the workspace, its configuration, the
//! external tools and the caller's environment.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Workspace;
use crate::tools::{GoTool, VendorTool};
use crate::util::config::{load_workspace_config, Config};

/// Global context containing the workspace, configuration and tools.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Enclosing workspace
    workspace: Workspace,

    /// Merged global and project configuration
    config: Config,

    /// `GOPATH` inherited from the caller's environment
    inherited_gopath: Option<OsString>,
}

impl GlobalContext {
    /// Discover the workspace enclosing the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(cwd)
    }

    /// Discover the workspace enclosing `cwd`.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let workspace = Workspace::discover(&cwd)?;
        let config = load_workspace_config(workspace.root());

        Ok(GlobalContext {
            cwd,
            workspace,
            config,
            inherited_gopath: std::env::var_os("GOPATH"),
        })
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the workspace.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the caller's `GOPATH`.
    pub fn inherited_gopath(&self) -> Option<&OsStr> {
        self.inherited_gopath.as_deref()
    }

    /// The `go` command to run.
    pub fn go_tool(&self) -> GoTool {
        GoTool::detect(self.configured_tool(self.config.tools.go.as_deref()).as_deref())
    }

    /// The `vendor` command to run.
    pub fn vendor_tool(&self) -> VendorTool {
        VendorTool::detect(self.configured_tool(self.config.tools.vendor.as_deref()).as_deref())
    }

    /// Configured tool paths containing a directory are relative to the
    /// workspace root; bare names are left for PATH lookup.
    fn configured_tool(&self, configured: Option<&Path>) -> Option<PathBuf> {
        let path = configured?;
        if path.is_relative() && path.components().count() > 1 {
            Some(self.workspace.root().join(path))
        } else {
            Some(path.to_path_buf())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workspace::{GOCFG_DIR, GOPATHS_FILE};
    use tempfile::TempDir;

    fn create_workspace(dir: &Path) {
        std::fs::create_dir_all(dir.join(GOCFG_DIR)).unwrap();
        std::fs::write(dir.join(GOCFG_DIR).join(GOPATHS_FILE), "go\n").unwrap();
    }

    #[test]
    fn test_context_discovers_workspace() {
        let tmp = TempDir::new().unwrap();
        create_workspace(tmp.path());
        let nested = tmp.path().join("go/src");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = GlobalContext::with_cwd(nested.clone()).unwrap();
        assert_eq!(ctx.cwd(), nested);
        assert_eq!(ctx.workspace().gopaths(), ["go"]);
    }

    #[test]
    fn test_project_config_is_loaded() {
        let tmp = TempDir::new().unwrap();
        create_workspace(tmp.path());
        std::fs::write(
            tmp.path().join(GOCFG_DIR).join("config.toml"),
            "[tools]\nvendor = \"bin/vendor\"\n",
        )
        .unwrap();

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf()).unwrap();
        assert_eq!(
            ctx.vendor_tool().program(),
            ctx.workspace().root().join("bin/vendor")
        );
    }

    #[test]
    fn test_absolute_tool_path_is_kept() {
        let tmp = TempDir::new().unwrap();
        create_workspace(tmp.path());
        let mut config = Config::default();
        config.tools.go = Some(tmp.path().join("go-bin"));

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf())
            .unwrap()
            .with_config(config);
        assert_eq!(ctx.go_tool().program(), tmp.path().join("go-bin"));
    }
}
