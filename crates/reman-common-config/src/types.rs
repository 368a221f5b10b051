//! Configuration types.

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Name of the config file at the store root.
pub const CONFIG_FILE_NAME: &str = ".reman";

/// Version written into `$version` at init.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Author name written at init.
pub const DEFAULT_AUTHOR_NAME: &str = "Reman";

/// Contents of `.reman`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Tool version that initialized the store. Absent means the file was
    /// not written by `reman init`.
    #[serde(
        rename = "$version",
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(default)]
    pub author: AuthorConfig,

    /// Keys reman does not know about, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl StoreConfig {
    pub fn is_initialized(&self) -> bool {
        self.version.is_some()
    }

    /// Author name, treating an empty value as unset.
    pub fn author_name(&self) -> Option<&str> {
        self.author.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: Some(TOOL_VERSION.to_string()),
            author: AuthorConfig {
                name: Some(DEFAULT_AUTHOR_NAME.to_string()),
            },
            extra: BTreeMap::new(),
        }
    }
}

/// The `author` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorConfig {
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

/// Accept any YAML scalar as a string, so `$version: 2` or a numeric
/// name still load.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a scalar value, found {other:?}"
        ))),
    }
}
