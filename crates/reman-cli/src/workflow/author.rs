//! `reman config`: view and edit the store record.

use std::path::Path;
use std::str::FromStr;

use reman_common_config::{ConfigStore, StoreConfig};
use reman_common_core::{validate_author_name, NameError};
use serde::Serialize;

use crate::error::CliError;
use crate::output::FormattedOutput;
use crate::prompts::Prompter;

pub const AUTHOR_HEADING: &str = "Author Info";
pub const AUTHOR_PROMPT: &str = "Name of author";

/// Keys accepted by `reman config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Version,
    AuthorName,
}

impl ConfigKey {
    pub const SETTABLE: [&'static str; 1] = ["author.name"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Version => "$version",
            Self::AuthorName => "author.name",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$version" => Ok(Self::Version),
            "author.name" => Ok(Self::AuthorName),
            other => Err(CliError::not_found_with_suggestions(
                "config key",
                other,
                Self::SETTABLE.iter().map(|k| k.to_string()).collect(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigReport {
    #[serde(rename = "$version")]
    pub version: Option<String>,
    pub author_name: Option<String>,
}

impl From<&StoreConfig> for ConfigReport {
    fn from(config: &StoreConfig) -> Self {
        Self {
            version: config.version.clone(),
            author_name: config.author_name().map(str::to_string),
        }
    }
}

impl FormattedOutput for ConfigReport {
    fn format_text(&self) -> String {
        format!(
            "$version: {}\nauthor.name: {}",
            self.version.as_deref().unwrap_or("-"),
            self.author_name.as_deref().unwrap_or("-"),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorReport {
    pub author_name: String,
    pub changed: bool,
}

impl FormattedOutput for AuthorReport {
    fn format_text(&self) -> String {
        if self.changed {
            format!("Author name set to {}", self.author_name)
        } else {
            format!("Author name unchanged ({})", self.author_name)
        }
    }
}

fn save_author(store: &ConfigStore, current: Option<&str>, name: &str) -> Result<AuthorReport, CliError> {
    if current == Some(name) {
        return Ok(AuthorReport {
            author_name: name.to_string(),
            changed: false,
        });
    }

    store.set_author_name(name)?;
    Ok(AuthorReport {
        author_name: name.to_string(),
        changed: true,
    })
}

/// Ask for the author name, defaulting to the current one.
pub fn configure_author(root: &Path, prompter: &mut dyn Prompter) -> Result<AuthorReport, CliError> {
    let store = ConfigStore::new(root);
    let config = store.load_initialized()?;
    let current = config.author_name();

    prompter.heading(AUTHOR_HEADING)?;
    let answer = prompter.input(AUTHOR_PROMPT, current)?;
    if answer.is_empty() {
        return Err(CliError::validation("author name", NameError::Empty));
    }

    validate_author_name(&answer).map_err(|e| CliError::validation("author name", e))?;
    save_author(&store, current, &answer)
}

/// `reman config set <key> <value>`.
pub fn set_value(root: &Path, key: &str, value: &str) -> Result<AuthorReport, CliError> {
    let key: ConfigKey = key.parse()?;
    let store = ConfigStore::new(root);
    let config = store.load_initialized()?;

    match key {
        ConfigKey::Version => Err(CliError::user_with_hint(
            format!("{} is read-only", key.as_str()),
            "run 'reman init' to rewrite the config file",
        )),
        ConfigKey::AuthorName => {
            validate_author_name(value).map_err(|e| CliError::validation("author name", e))?;
            save_author(&store, config.author_name(), value)
        }
    }
}

/// `reman config show`.
pub fn show_config(root: &Path) -> Result<ConfigReport, CliError> {
    let config = ConfigStore::new(root).load_initialized()?;
    Ok(ConfigReport::from(&config))
}
