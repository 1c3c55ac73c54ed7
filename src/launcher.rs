use std::env::consts::EXE_SUFFIX;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::constants::MODULES_DIR_NAME;
use crate::registry::Module;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("module file does not exist: {}", .path.display())]
    ModuleNotFound { path: PathBuf },
    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("module {module} exited with {status}")]
    Unsuccessful { module: Module, status: ExitStatus },
}

/// Starts module executables from `<base>/modules/`.
pub struct ModuleLauncher {
    modules_dir: PathBuf,
}

impl ModuleLauncher {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            modules_dir: base_dir.join(MODULES_DIR_NAME),
        }
    }

    pub fn module_path(&self, module: Module) -> PathBuf {
        self.modules_dir
            .join(format!("{}{}", module.executable(), EXE_SUFFIX))
    }

    /// Run the module with inherited stdio and wait for it.
    ///
    /// Any unsuccessful exit is an error; the child's own exit code is not
    /// passed on.
    pub fn launch(&self, module: Module, args: &[OsString]) -> Result<(), LaunchError> {
        let path = self.module_path(module);
        if !path.is_file() {
            return Err(LaunchError::ModuleNotFound { path });
        }

        tracing::debug!(%module, path = %path.display(), ?args, "launching module");
        let status = Command::new(&path)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(%module, %status, "module finished");

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Unsuccessful { module, status })
        }
    }
}
