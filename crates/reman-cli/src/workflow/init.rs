//! `reman init`: lay out a store in an existing directory.

use std::path::{Path, PathBuf};

use reman_common_config::{ConfigStore, CONFIG_FILE_NAME};
use reman_common_fs::{self as rfs, path::display_relative};
use serde::Serialize;

use crate::error::CliError;
use crate::output::FormattedOutput;
use crate::prompts::Prompter;

pub const NOT_EMPTY_PROMPT: &str = "Directory not empty, do you wish to continue?";
pub const REINIT_PROMPT: &str = "Config file found, do you want to reinitialize?";

/// What happened to `.reman`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigOutcome {
    Written,
    Reinitialized,
    Kept,
}

#[derive(Debug, Serialize)]
pub struct InitReport {
    pub root: PathBuf,
    /// Directories created, relative to the root.
    pub created: Vec<String>,
    /// Directories that were already there.
    pub existing: Vec<String>,
    pub config: ConfigOutcome,
}

impl FormattedOutput for InitReport {
    fn format_text(&self) -> String {
        let mut out = format!("Initialized reman store in {}", self.root.display());
        match self.config {
            ConfigOutcome::Written => {}
            ConfigOutcome::Reinitialized => {
                out.push_str(&format!("\nReinitialized config file {CONFIG_FILE_NAME}"))
            }
            ConfigOutcome::Kept => {
                out.push_str(&format!("\nKept existing config file {CONFIG_FILE_NAME}"))
            }
        }
        out
    }
}

/// Initialize a store at `root`.
///
/// The root must already exist. A non-empty root needs confirmation, and
/// declining leaves the filesystem untouched. Existing layout directories
/// are kept. An existing config is only replaced after confirmation.
pub fn init_store(root: &Path, prompter: &mut dyn Prompter) -> Result<InitReport, CliError> {
    if let Err(e) = rfs::directory_exists(root) {
        return Err(if e.is_not_found() {
            CliError::not_found("directory", root.display().to_string())
        } else {
            e.into()
        });
    }

    if !rfs::is_empty_dir(root)? && !prompter.confirm(NOT_EMPTY_PROMPT)? {
        return Err(CliError::Aborted);
    }

    let layout = rfs::create_layout(root)?;

    let store = ConfigStore::new(root);
    let config = if !store.exists() {
        store.initialize()?;
        ConfigOutcome::Written
    } else if prompter.confirm(REINIT_PROMPT)? {
        store.initialize()?;
        ConfigOutcome::Reinitialized
    } else {
        tracing::info!(path = %store.path().display(), "kept existing config");
        ConfigOutcome::Kept
    };

    let relative = |dirs: &[PathBuf]| -> Vec<String> {
        dirs.iter().map(|d| display_relative(d, root)).collect()
    };

    Ok(InitReport {
        root: root.to_path_buf(),
        created: relative(&layout.created),
        existing: relative(&layout.existing),
        config,
    })
}
