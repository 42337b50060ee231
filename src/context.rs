//! Workspace context resolution for addon-config.
//!
//! This module finds the workspace root from any working directory and derives
//! every path the resolver and the feature registry use. All commands go
//! through it so that they agree on where documents live.

use crate::domain::AddonDomain;
use crate::error::{ConfigError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Feature registry path relative to the workspace root.
pub const REGISTRY_RELATIVE_PATH: &str = "method/config/features.yml";

/// Directory holding one subdirectory per add-on domain.
pub const ADDONS_DIR: &str = "addons";

/// Resolved paths for one workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    /// Workspace root directory.
    pub root: PathBuf,

    /// `{root}/addons/`.
    pub addons_dir: PathBuf,

    /// `{root}/method/config/features.yml`.
    pub registry_path: PathBuf,
}

impl WorkspaceContext {
    /// Resolve the workspace from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ConfigError::Shape(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(&cwd))
    }

    /// Resolve the workspace from a specific directory.
    ///
    /// Walks up from `start` to the first directory that holds the feature
    /// registry or an `addons/` directory. When none does, `start` itself is
    /// the root.
    pub fn resolve_from<P: AsRef<Path>>(start: P) -> Self {
        let start = start.as_ref();
        let root = start
            .ancestors()
            .find(|dir| is_workspace_root(dir))
            .unwrap_or(start);

        log::debug!("workspace root: {}", root.display());
        Self::at(root)
    }

    /// Use `root` as the workspace root without searching.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            addons_dir: root.join(ADDONS_DIR),
            registry_path: root.join(REGISTRY_RELATIVE_PATH),
            root,
        }
    }

    /// `{root}/addons/{slug}/`.
    pub fn addon_dir(&self, domain: &AddonDomain) -> PathBuf {
        self.addons_dir.join(domain.slug)
    }

    /// `{root}/addons/{slug}/config/{slug}.yml`.
    pub fn base_config_path(&self, domain: &AddonDomain) -> PathBuf {
        self.addon_dir(domain)
            .join("config")
            .join(domain.base_file_name())
    }

    /// `{root}/addons/{slug}/profiles/`.
    pub fn profiles_dir(&self, domain: &AddonDomain) -> PathBuf {
        self.addon_dir(domain).join("profiles")
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    dir.join(REGISTRY_RELATIVE_PATH).is_file() || dir.join(ADDONS_DIR).is_dir()
}
