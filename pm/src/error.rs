//! Prompt composer error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library
///
/// Composition itself never fails. These come from loading files and from
/// host capabilities, and most callers downgrade them to a status flag.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Unknown style: {id}")]
    UnknownStyle { id: String },

    #[error("Invalid preset '{id}': {reason}")]
    InvalidPreset { id: String, reason: String },

    #[error("Catalog has no presets")]
    EmptyCatalog,

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Preference store unavailable: {0}")]
    Preferences(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
