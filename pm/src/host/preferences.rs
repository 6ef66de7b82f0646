//! Preference storage
//!
//! Small key/value store for settings that outlive a session. The only key
//! written today is the theme.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PromptError;

/// Persistent key/value access
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PromptError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PromptError>;
}

/// In-process store, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PromptError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PromptError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// YAML map of key to value, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "FilePreferences::new: called");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PromptError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "FilePreferences::read_all: no file yet");
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| PromptError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&content).map_err(|source| PromptError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PromptError> {
        debug!(%key, "FilePreferences::get: called");
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PromptError> {
        debug!(%key, %value, "FilePreferences::set: called");
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(&values).map_err(|e| PromptError::Preferences(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
