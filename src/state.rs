use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::launcher::ModuleLauncher;

/// Per-run context rooted at the directory holding the running binary.
pub struct AppState {
    base_dir: PathBuf,
    config_store: ConfigStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_base_dir(base_directory())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        let config_store = ConfigStore::in_dir(&base_dir);
        Self {
            base_dir,
            config_store,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config_store
    }

    pub fn launcher(&self) -> ModuleLauncher {
        ModuleLauncher::new(&self.base_dir)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory of the running executable, not the working directory.
pub fn base_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
