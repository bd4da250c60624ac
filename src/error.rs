//! Error types for property schema handling
//!
//! Compilation itself is total and never fails. These errors belong to the
//! surfaces around it: configuration, serialization and IO.

use thiserror::Error;

/// Result type for property schema operations
pub type Result<T> = std::result::Result<T, PropertyError>;

/// Property schema errors
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("Schema is missing the reserved \"default\" property")]
    MissingDefault,

    #[error("Schema key \"{key}\" holds property \"{name}\"")]
    KeyMismatch { key: String, name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}
