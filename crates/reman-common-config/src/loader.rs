//! Loading and saving the store config file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reman_common_core::{validate_author_name, NameError};
use thiserror::Error;

use crate::types::{StoreConfig, CONFIG_FILE_NAME};

/// Config access errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("valid config file not found at {}", path.display())]
    NotInitialized { path: PathBuf },

    #[error("failed to read config {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("failed to write config {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    ValidationError(#[from] NameError),
}

impl ConfigError {
    /// True when the store has no usable config yet.
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotInitialized { .. })
    }
}

/// Handle on the config file of one store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Bind to the store rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(CONFIG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `.reman` is present. Does not read it.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse `.reman`.
    pub fn load(&self) -> Result<StoreConfig, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound {
                path: self.path.clone(),
            },
            _ => ConfigError::ReadError {
                path: self.path.clone(),
                source: e,
            },
        })?;

        // An empty file parses as null, not as a mapping
        if contents.trim().is_empty() {
            return Ok(StoreConfig {
                version: None,
                author: Default::default(),
                extra: Default::default(),
            });
        }

        serde_yaml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }

    /// Load a config written by `reman init`.
    ///
    /// A missing file or one without `$version` is reported as
    /// [`ConfigError::NotInitialized`].
    pub fn load_initialized(&self) -> Result<StoreConfig, ConfigError> {
        let config = match self.load() {
            Ok(config) => config,
            Err(ConfigError::NotFound { path }) => return Err(ConfigError::NotInitialized { path }),
            Err(e) => return Err(e),
        };

        if !config.is_initialized() {
            return Err(ConfigError::NotInitialized {
                path: self.path.clone(),
            });
        }
        Ok(config)
    }

    /// Write `config` to `.reman`, replacing the file.
    pub fn save(&self, config: &StoreConfig) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        fs::write(&self.path, yaml).map_err(|e| ConfigError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), "wrote config");
        Ok(())
    }

    /// Write a fresh config with the current version and default author.
    pub fn initialize(&self) -> Result<StoreConfig, ConfigError> {
        let config = StoreConfig::default();
        self.save(&config)?;
        tracing::info!(path = %self.path.display(), "initialized config");
        Ok(config)
    }

    /// Configured author name. `None` if the file is missing, unreadable,
    /// or the name is unset.
    pub fn author_name(&self) -> Option<String> {
        match self.load() {
            Ok(config) => config.author_name().map(str::to_string),
            Err(e) => {
                tracing::debug!(error = %e, "no author name available");
                None
            }
        }
    }

    /// Validate and persist a new author name.
    ///
    /// The file is left untouched when validation fails.
    pub fn set_author_name(&self, name: &str) -> Result<StoreConfig, ConfigError> {
        validate_author_name(name)?;

        let mut config = self.load()?;
        config.author.name = Some(name.to_string());
        self.save(&config)?;

        tracing::info!(author = name, "updated author name");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_AUTHOR_NAME, TOOL_VERSION};
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        assert!(!store.exists());

        match store.load().unwrap_err() {
            ConfigError::NotFound { path } => assert_eq!(path, dir.path().join(".reman")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
        assert!(store.author_name().is_none());
    }

    #[test]
    fn test_initialize_writes_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());

        store.initialize().unwrap();
        assert!(store.exists());

        let config = store.load().unwrap();
        assert_eq!(config.version.as_deref(), Some(TOOL_VERSION));
        assert_eq!(store.author_name().as_deref(), Some(DEFAULT_AUTHOR_NAME));
    }

    #[test]
    fn test_initialize_overwrites_existing() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        fs::write(store.path(), "$version: 0.0.1\nauthor:\n  name: Jane\n").unwrap();

        store.initialize().unwrap();
        assert_eq!(store.author_name().as_deref(), Some("Reman"));
        assert_eq!(store.load().unwrap().version.as_deref(), Some(TOOL_VERSION));
    }

    #[test]
    fn test_set_author_name() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        store.initialize().unwrap();

        store.set_author_name("Jane").unwrap();
        assert_eq!(store.author_name().as_deref(), Some("Jane"));
        // Version survives the rewrite
        assert!(store.load().unwrap().is_initialized());
    }

    #[test]
    fn test_set_author_name_rejects_invalid_without_writing() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        store.initialize().unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        for (name, expected) in [
            ("", NameError::Empty),
            ("Abcdefghijklmnopqrst", NameError::TooLong { limit: 19 }),
            ("Jane Doe", NameError::InvalidCharacters),
        ] {
            match store.set_author_name(name).unwrap_err() {
                ConfigError::ValidationError(err) => assert_eq!(err, expected),
                other => panic!("Expected ValidationError, got {other:?}"),
            }
        }

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_load_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        assert!(store.load_initialized().unwrap_err().is_uninitialized());

        fs::write(store.path(), "author:\n  name: Jane\n").unwrap();
        assert!(store.load_initialized().unwrap_err().is_uninitialized());

        fs::write(store.path(), "").unwrap();
        assert!(store.load_initialized().unwrap_err().is_uninitialized());

        fs::write(store.path(), "$version: 0.1.0\n").unwrap();
        let config = store.load_initialized().unwrap();
        assert!(config.author_name().is_none());
    }

    #[test]
    fn test_empty_author_name_is_unset() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        fs::write(store.path(), "$version: 0.1.0\nauthor:\n  name: \"\"\n").unwrap();
        assert!(store.author_name().is_none());
    }

    #[test]
    fn test_unknown_keys_survive_save() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        fs::write(
            store.path(),
            "$version: 0.1.0\nauthor:\n  name: Jane\npreview:\n  engine: pdflatex\n",
        )
        .unwrap();

        store.set_author_name("Joan").unwrap();
        let written = fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("engine: pdflatex"));
        assert!(written.contains("name: Joan"));
    }

    #[test]
    fn test_numeric_scalars_load_as_strings() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        fs::write(store.path(), "$version: 2\nauthor:\n  name: 2024\n").unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.version.as_deref(), Some("2"));
        assert_eq!(config.author_name(), Some("2024"));
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        fs::write(store.path(), "$version: 0.1.0\nauthor:\n  name: [unclosed\n").unwrap();

        match store.load().unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("Expected ParseError, got {other:?}"),
        }
        assert!(store.author_name().is_none());
    }
}
