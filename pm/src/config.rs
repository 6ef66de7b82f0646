//! PromptMatrix configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::styles::DEFAULT_STYLE_ID;

/// Main PromptMatrix configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Style selected at startup
    #[serde(rename = "default-style")]
    pub default_style: String,

    /// Extra presets to merge into the built-in catalog
    #[serde(rename = "presets-file")]
    pub presets_file: Option<PathBuf>,

    /// Where the theme preference is kept
    #[serde(rename = "preferences-file")]
    pub preferences_file: PathBuf,

    /// Directory exported Markdown files are written to
    #[serde(rename = "export-dir")]
    pub export_dir: PathBuf,

    /// Command that receives copied text on stdin
    #[serde(rename = "clipboard-command")]
    pub clipboard_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            default_style: DEFAULT_STYLE_ID.to_string(),
            presets_file: None,
            preferences_file: default_preferences_file(),
            export_dir: PathBuf::from("."),
            clipboard_command: default_clipboard_command().to_string(),
        }
    }
}

fn default_preferences_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptmatrix")
        .join("preferences.yml")
}

fn default_clipboard_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "pbcopy"
    } else if cfg!(target_os = "windows") {
        "clip"
    } else {
        "wl-copy"
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are ignored here; `load` reports them once logging exists.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::default_paths(),
        };
        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|config| config.log_level)
    }

    /// Project-local `.promptmatrix.yml`, then `~/.config/promptmatrix/promptmatrix.yml`
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".promptmatrix.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("promptmatrix").join("promptmatrix.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.default_style, "academic");
        assert!(config.presets_file.is_none());
        assert!(config.preferences_file.ends_with("promptmatrix/preferences.yml"));
        assert!(!config.clipboard_command.is_empty());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug
default-style: minimal
presets-file: /etc/promptmatrix/presets.yml
preferences-file: /tmp/prefs.yml
export-dir: /tmp/exports
clipboard-command: xclip -selection clipboard
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.default_style, "minimal");
        assert_eq!(config.presets_file, Some(PathBuf::from("/etc/promptmatrix/presets.yml")));
        assert_eq!(config.preferences_file, PathBuf::from("/tmp/prefs.yml"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.clipboard_command, "xclip -selection clipboard");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
default-style: creative
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.default_style, "creative");

        // Defaults for unspecified
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pm.yml");
        fs::write(&path, "log-level: warn\nexport-dir: out\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load_log_level(Some(&path)).is_none());
    }
}
