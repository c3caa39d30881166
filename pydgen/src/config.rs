//! `pydgen.toml` configuration files.
//!
//! ```toml
//! enum_style = "str-mixin"
//!
//! [scalars]
//! DateTime = "datetime"
//! JSON = "any"
//! ```
//!
//! Command-line options are applied on top of the file.

use crate::error::ConfigError;
use indexmap::IndexMap;
use pydgen_codegen::{CodegenConfig, EnumStyle, ScalarTarget};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "pydgen.toml";

/// Contents of a configuration file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Enum style name, `str-enum` or `str-mixin`.
    pub enum_style: Option<String>,
    /// GraphQL scalar name to Python type; `any` maps to `typing.Any`.
    pub scalars: IndexMap<String, String>,
}

impl FileConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidToml` if the text does not parse.
    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::invalid_toml(path, e.to_string()))
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(path, &content)
    }

    /// Loads `path` if given, otherwise [`CONFIG_FILENAME`] from `dir` when
    /// it exists, otherwise the defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if a file is found but cannot be read or parsed.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Converts the file settings into a generator configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Setting` for an unknown enum style or an empty
    /// scalar target.
    pub fn into_codegen_config(self) -> Result<CodegenConfig, ConfigError> {
        let mut config = CodegenConfig::new();

        if let Some(style) = self.enum_style {
            config = config.enum_style(style.parse::<EnumStyle>()?);
        }

        for (name, target) in self.scalars {
            let target = target.parse::<ScalarTarget>()?;
            config = config.scalar(name, target);
        }

        Ok(config)
    }
}
