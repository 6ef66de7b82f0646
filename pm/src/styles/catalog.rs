//! Style Catalog
//!
//! Read-only lookup from style id to preset. Built once at startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::{StylePreset, builtin};
use crate::error::PromptError;

/// On-disk shape of a presets file
#[derive(Debug, Deserialize)]
struct PresetsFile {
    #[serde(default)]
    presets: Vec<StylePreset>,
}

/// Immutable catalog of style presets, in display order
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    presets: Vec<StylePreset>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleCatalog {
    /// Catalog of the six built-in presets
    pub fn builtin() -> Self {
        debug!("StyleCatalog::builtin: called");
        Self {
            presets: builtin::builtin_presets(),
        }
    }

    /// Build a catalog from an explicit list
    ///
    /// Later entries with a repeated id replace earlier ones in place.
    pub fn from_presets(presets: Vec<StylePreset>) -> Result<Self, PromptError> {
        debug!(count = presets.len(), "StyleCatalog::from_presets: called");
        let catalog = Self { presets: Vec::new() }.with_presets(presets)?;
        if catalog.presets.is_empty() {
            return Err(PromptError::EmptyCatalog);
        }
        Ok(catalog)
    }

    /// Extend this catalog with additional presets
    ///
    /// A preset whose id already exists replaces the existing entry at the
    /// same position; new ids are appended.
    pub fn with_presets(mut self, presets: Vec<StylePreset>) -> Result<Self, PromptError> {
        debug!(count = presets.len(), "StyleCatalog::with_presets: called");
        for preset in presets {
            validate(&preset)?;
            match self.index_of(&preset.id) {
                Some(index) => {
                    debug!(id = %preset.id, "StyleCatalog::with_presets: replacing existing preset");
                    self.presets[index] = preset;
                }
                None => {
                    debug!(id = %preset.id, "StyleCatalog::with_presets: appending preset");
                    self.presets.push(preset);
                }
            }
        }
        Ok(self)
    }

    /// Extend this catalog with the presets defined in a YAML file
    pub fn with_presets_file(self, path: impl AsRef<Path>) -> Result<Self, PromptError> {
        let path = path.as_ref();
        debug!(?path, "StyleCatalog::with_presets_file: called");
        let content = fs::read_to_string(path).map_err(|source| PromptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: PresetsFile = serde_yaml::from_str(&content).map_err(|source| PromptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded {} preset(s) from {}", file.presets.len(), path.display());
        self.with_presets(file.presets)
    }

    /// Look up a preset by id
    pub fn get(&self, id: &str) -> Option<&StylePreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Preset ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StylePreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.id == id)
    }

    pub(crate) fn preset_at(&self, index: usize) -> &StylePreset {
        &self.presets[index]
    }
}

fn validate(preset: &StylePreset) -> Result<(), PromptError> {
    if preset.id.trim().is_empty() {
        return Err(PromptError::InvalidPreset {
            id: preset.id.clone(),
            reason: "id is empty".to_string(),
        });
    }
    if preset.system_instruction.trim().is_empty() {
        return Err(PromptError::InvalidPreset {
            id: preset.id.clone(),
            reason: "system instruction is empty".to_string(),
        });
    }
    Ok(())
}
