//! Display theme preference

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::host::PreferenceStore;

/// Preference key the theme is stored under
pub const THEME_PREFERENCE_KEY: &str = "promptmatrix-theme";

/// Supported display modes
///
/// Light mode is no longer offered; requests for it resolve to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
        }
    }

    /// Map any requested name onto a supported theme
    pub fn canonicalize(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dark" => Self::Dark,
            "light" => {
                debug!("Theme::canonicalize: legacy light theme, using dark");
                Self::Dark
            }
            other => {
                warn!("Unknown theme '{}', using dark", other);
                Self::Dark
            }
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks the active theme and persists changes
///
/// Storage failures never surface: the theme still applies for the session.
pub struct ThemeController<P: PreferenceStore> {
    store: P,
    active: Theme,
}

impl<P: PreferenceStore> ThemeController<P> {
    pub fn new(store: P) -> Self {
        debug!("ThemeController::new: called");
        Self {
            store,
            active: Theme::default(),
        }
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Canonicalize, activate and persist a theme
    pub fn apply_theme(&mut self, name: &str) -> Theme {
        debug!(%name, "ThemeController::apply_theme: called");
        let theme = Theme::canonicalize(name);
        self.active = theme;

        if let Err(e) = self.store.set(THEME_PREFERENCE_KEY, theme.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }

        info!("Theme set to {}", theme);
        theme
    }

    /// Apply the persisted theme, or dark when none is stored
    pub fn load_initial_theme(&mut self) -> Theme {
        debug!("ThemeController::load_initial_theme: called");
        let stored = match self.store.get(THEME_PREFERENCE_KEY) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                None
            }
        };

        match stored {
            Some(name) => self.apply_theme(&name),
            None => {
                debug!("ThemeController::load_initial_theme: nothing stored, using default");
                self.apply_theme(Theme::default().as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use crate::host::MemoryPreferences;

    /// Store whose backend is unavailable
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PromptError> {
            Err(PromptError::Preferences("storage disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PromptError> {
            Err(PromptError::Preferences("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_light_is_coerced_to_dark() {
        let mut controller = ThemeController::new(MemoryPreferences::new());

        let theme = controller.apply_theme("light");

        assert_eq!(theme, Theme::Dark);
        assert_eq!(controller.active(), Theme::Dark);
        assert_eq!(
            controller.store().get(THEME_PREFERENCE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(Theme::canonicalize("dark"), Theme::Dark);
        assert_eq!(Theme::canonicalize(" DARK "), Theme::Dark);
        assert_eq!(Theme::canonicalize("light"), Theme::Dark);
        assert_eq!(Theme::canonicalize("solarized"), Theme::Dark);
    }

    #[test]
    fn test_load_initial_defaults_to_dark() {
        let mut controller = ThemeController::new(MemoryPreferences::new());

        assert_eq!(controller.load_initial_theme(), Theme::Dark);
        assert_eq!(
            controller.store().get(THEME_PREFERENCE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_load_initial_rewrites_legacy_value() {
        let mut prefs = MemoryPreferences::new();
        prefs.set(THEME_PREFERENCE_KEY, "light").unwrap();
        let mut controller = ThemeController::new(prefs);

        assert_eq!(controller.load_initial_theme(), Theme::Dark);
        assert_eq!(
            controller.store().get(THEME_PREFERENCE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_storage_failure_is_swallowed() {
        let mut controller = ThemeController::new(BrokenStore);

        assert_eq!(controller.load_initial_theme(), Theme::Dark);
        assert_eq!(controller.apply_theme("light"), Theme::Dark);
        assert_eq!(controller.active(), Theme::Dark);
    }
}
