//! Configuration for reman stores.
//!
//! Each store keeps its settings in a `.reman` YAML file at its root.
//! There is no global configuration: every access goes through a
//! [`ConfigStore`] bound to one root directory.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_sensible_values() {
        let config = StoreConfig::default();
        assert_eq!(config.version.as_deref(), Some(TOOL_VERSION));
        assert_eq!(config.author.name.as_deref(), Some(DEFAULT_AUTHOR_NAME));
        assert!(config.is_initialized());
    }

    #[test]
    fn test_config_serializes_to_yaml() {
        let yaml = serde_yaml::to_string(&StoreConfig::default()).unwrap();
        assert!(yaml.contains("$version:"));
        assert!(yaml.contains("author:"));
        assert!(yaml.contains("name: Reman"));
    }

    #[test]
    fn test_partial_configs_fall_back() {
        let config: StoreConfig = serde_yaml::from_str("author:\n  name: Jane\n").unwrap();
        assert_eq!(config.author.name.as_deref(), Some("Jane"));
        assert!(config.version.is_none());
        assert!(!config.is_initialized());

        let config: StoreConfig = serde_yaml::from_str("$version: 0.0.9\n").unwrap();
        assert!(config.is_initialized());
        assert!(config.author.name.is_none());
    }
}
