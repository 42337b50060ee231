use crate::context::WorkspaceContext;
use crate::domain::AddonDomain;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A throwaway workspace with add-on documents laid out on disk.
pub(crate) struct Workspace {
    pub(crate) dir: TempDir,
    pub(crate) ctx: WorkspaceContext,
}

impl Workspace {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::at(dir.path());
        std::fs::create_dir_all(&ctx.addons_dir).unwrap();
        Self { dir, ctx }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn with_base(self, domain: &AddonDomain, text: &str) -> Self {
        write(&self.ctx.base_config_path(domain), text);
        self
    }

    pub(crate) fn with_profile(self, domain: &AddonDomain, name: &str, text: &str) -> Self {
        write(&self.ctx.profiles_dir(domain).join(format!("{}.yml", name)), text);
        self
    }

    pub(crate) fn with_registry(self, text: &str) -> Self {
        write(&self.ctx.registry_path, text);
        self
    }
}

fn write(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, text).unwrap();
}
