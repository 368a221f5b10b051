//! CLI error handling and formatting.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use reman_common_config::ConfigError;
use reman_common_core::{Error as StoreError, ErrorCode, NameError};
use thiserror::Error;

use crate::prompts::PromptError;

pub mod formatter;
pub mod handler;

pub use formatter::ErrorFormatter;
pub use handler::{handle_result, setup_panic_handler};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxError>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: Option<BoxError>,
        path: Option<PathBuf>,
    },

    #[error("valid config file not found, try running 'reman init'")]
    NotInitialized { path: PathBuf },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
        suggestions: Vec<String>,
    },

    #[error("{message}")]
    Permission {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    AlreadyExists { message: String, path: PathBuf },

    #[error("no templates found, please copy a latex file into src/templates to use it")]
    NoTemplates { dir: PathBuf },

    #[error("{message}")]
    User {
        message: String,
        hint: Option<String>,
    },

    #[error("{0}")]
    Prompt(#[source] PromptError),

    #[error("Aborted")]
    Aborted,

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::NotInitialized { .. } => "E003",
            Self::Validation { .. } => "E004",
            Self::NotFound { .. } => "E005",
            Self::Permission { .. } => "E006",
            Self::AlreadyExists { .. } => "E007",
            Self::NoTemplates { .. } => "E008",
            Self::Prompt(_) => "E009",
            Self::User { .. } => "E010",
            Self::Aborted => "E011",
            Self::Other(_) => "E999",
        }
    }

    /// Every failure, a declined confirmation included, exits with 1.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } | Self::User { hint, .. } => hint.as_deref(),
            Self::NotFound { suggestions, .. } if !suggestions.is_empty() => {
                Some("See suggestions below")
            }
            _ => None,
        }
    }

    /// Get suggestions for this error
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// Path involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Permission { path, .. } => path.as_deref(),
            Self::NotInitialized { path }
            | Self::AlreadyExists { path, .. }
            | Self::NoTemplates { dir: path } => Some(path),
            _ => None,
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self::not_found_with_suggestions(resource_type, resource_name, vec![])
    }

    /// Create a not found error with suggestions
    pub fn not_found_with_suggestions(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        let resource_type = resource_type.into();
        let resource_name = resource_name.into();
        Self::NotFound {
            message: format!("{resource_type} not found: {resource_name}"),
            resource_type,
            resource_name,
            suggestions,
        }
    }

    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, err: NameError) -> Self {
        Self::Validation {
            message: err.to_string(),
            field: Some(field.into()),
        }
    }

    /// Create a user error with hint
    pub fn user_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

// Conversion implementations
impl From<NameError> for CliError {
    fn from(err: NameError) -> Self {
        Self::Validation {
            message: err.to_string(),
            field: None,
        }
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        if let StoreError::Validation(name) = err {
            return name.into();
        }

        let path = err.path().map(Path::to_path_buf);
        match (err.code(), path) {
            (ErrorCode::FILE_NOT_FOUND, Some(path)) => {
                Self::not_found("path", path.display().to_string())
            }
            (ErrorCode::ALREADY_EXISTS, Some(path)) => Self::AlreadyExists {
                message: err.to_string(),
                path,
            },
            (ErrorCode::PERMISSION_DENIED, path) => Self::Permission {
                message: err.to_string(),
                path,
            },
            (_, path) => Self::Io {
                message: err.to_string(),
                source: Some(Box::new(err)),
                path,
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { path } | ConfigError::NotInitialized { path } => {
                Self::NotInitialized { path }
            }
            ConfigError::ValidationError(name) => name.into(),
            other => Self::Config {
                message: format!("Configuration error: {other}"),
                source: Some(Box::new(other)),
                hint: Some("Check the .reman file in the store root".to_string()),
            },
        }
    }
}

impl From<PromptError> for CliError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => Self::Aborted,
            other => Self::Prompt(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::anyhow!("JSON serialization failed: {err}"))
    }
}
