//! Error types for domnav.

use std::io;

/// Errors produced by the domnav crates.
///
/// Navigation itself never fails: a move with no candidate is a normal
/// outcome. Errors only come from construction, configuration loading and
/// adapter dispatch.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("container not found: {0}")]
    ContainerNotFound(String),

    #[error("unknown navigator method: {0}")]
    UnknownMethod(String),

    #[error("no navigator attached to this container")]
    NotAttached,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NavError>;
