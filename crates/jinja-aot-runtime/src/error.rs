//! # Runtime Error Types
//!
//! Errors surfaced to generated template code. Everything that can degrade
//! gracefully does so without an error; these variants cover caller contract
//! violations only.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Contract violations raised while a template renders.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("filter '{filter}' expects {expected}, got {found}")]
    InvalidArgument {
        filter: String,
        expected: &'static str,
        found: Kind,
    },

    #[error("filter '{filter}' requires argument '{argument}'")]
    MissingArgument {
        filter: String,
        argument: &'static str,
    },

    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("'{0}' is not a callable global")]
    NotCallable(String),

    #[error("function '{name}' failed: {message}")]
    Function { name: String, message: String },

    #[error("context variables must serialize to a mapping, got {0}")]
    InvalidContext(Kind),

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RuntimeError {
    /// Create an invalid argument error for a filter.
    pub fn invalid_argument(filter: impl Into<String>, expected: &'static str, found: Kind) -> Self {
        Self::InvalidArgument {
            filter: filter.into(),
            expected,
            found,
        }
    }

    /// Create a missing argument error for a filter.
    pub fn missing_argument(filter: impl Into<String>, argument: &'static str) -> Self {
        Self::MissingArgument {
            filter: filter.into(),
            argument,
        }
    }

    /// Create an error reported by an extension function.
    pub fn function(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Function {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while loading or applying a [`crate::RuntimeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid runtime configuration: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("filter alias '{alias}' points at unknown filter '{target}'")]
    UnknownAliasTarget { alias: String, target: String },
}
