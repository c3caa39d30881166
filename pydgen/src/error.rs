//! Error types for configuration loading.

use pydgen_codegen::CodegenError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for `pydgen.toml` loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected keys.
    #[error("invalid config {path}: {message}")]
    InvalidToml {
        /// Config file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A value parsed but is not a valid setting.
    #[error(transparent)]
    Setting(#[from] CodegenError),
}

impl ConfigError {
    /// Creates an invalid TOML error.
    pub fn invalid_toml(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path: path.into(),
            message: message.into(),
        }
    }
}
