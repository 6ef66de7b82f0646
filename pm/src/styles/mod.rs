//! Style Preset Catalog
//!
//! A style preset bundles the default system instruction, constraints and
//! output-format hints for one writing persona.
//!
//! Catalog contents:
//! 1. Built-in presets compiled into the binary
//! 2. Optional presets file (replaces built-ins with the same id, appends new ones)

pub mod builtin;
mod catalog;

use serde::{Deserialize, Serialize};

pub use builtin::DEFAULT_STYLE_ID;
pub use catalog::StyleCatalog;

/// A named bundle of default section content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreset {
    /// Stable identifier, also used in export filenames
    pub id: String,

    /// Display name (localized form plus English form)
    pub label: String,

    /// Persona/behavior text for the System section
    #[serde(rename = "system")]
    pub system_instruction: String,

    /// Rendered as a numbered list in the Constraints section
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Rendered as a numbered list in the Output format section
    #[serde(default, rename = "output-format")]
    pub output_format_hints: Vec<String>,
}
