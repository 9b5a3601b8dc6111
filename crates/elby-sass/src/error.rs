//! Error types for style compilation.
//!
//! Copyright (c) 2025 Posit, PBC

use thiserror::Error;

/// Problems found while reading a single setting.
///
/// None of these abort stylesheet generation. The compiling functions
/// log them and continue with the setting's default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Color value is not 3 or 6 hex digits (optionally prefixed with `#`)
    #[error("invalid hex color '{value}': expected 3 or 6 hex digits with an optional leading '#'")]
    InvalidColorFormat { value: String },

    /// Enum setting holds a tag outside its declared choices
    #[error("unknown value '{value}' for setting '{key}'")]
    UnknownEnumValue { key: &'static str, value: String },
}

/// Errors loading a settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse settings YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
