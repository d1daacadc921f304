use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scope::DEFAULT_SCOPE_SEPARATOR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The struct subsystem config, read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
}

/// How qualified struct type names are spelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Put between enclosing scope names, and between the scope path and the type name.
    pub scope_separator: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            scope_separator: DEFAULT_SCOPE_SEPARATOR.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.naming.scope_separator, "::");
    }

    #[test]
    fn custom_separator() {
        let config = Config::from_toml_str(
            r#"
[naming]
scope_separator = "."
"#,
        )
        .unwrap();
        assert_eq!(config.naming.scope_separator, ".");
    }

    #[test]
    fn invalid_toml() {
        let error = Config::from_toml_str("[naming").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)), "{:#?}", error);
    }
}
