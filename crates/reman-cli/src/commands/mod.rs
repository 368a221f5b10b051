//! Command implementations.

mod config;
mod init;
mod new;

pub use config::{ConfigAction, ConfigCommand};
pub use init::InitCommand;
pub use new::NewCommand;

use std::env;
use std::path::{Path, PathBuf};

use clap::{Args, ValueHint};

use crate::error::CliError;

/// Store directory selection shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct StoreDir {
    /// Store root (defaults to the current directory)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,
}

impl StoreDir {
    pub fn resolve(&self) -> Result<PathBuf, CliError> {
        resolve_root(self.dir.as_deref())
    }
}

/// Resolve the store root, falling back to the working directory.
pub fn resolve_root(dir: Option<&Path>) -> Result<PathBuf, CliError> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => env::current_dir().map_err(|e| CliError::Io {
            message: format!("failed to read current directory: {e}"),
            source: Some(Box::new(e)),
            path: None,
        }),
    }
}
