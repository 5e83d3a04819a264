use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::errors::{PaletteError, PaletteResult};
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

/// API key and search-scope id. Read-only once loaded.
#[derive(Clone, PartialEq)]
pub struct SearchCredentials {
    pub api_key: String,
    pub cx_id: String,
}

impl fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("api_key", &"<redacted>")
            .field("cx_id", &self.cx_id)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreferences {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub cx_id: String,
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_search_endpoint() -> String {
    global_constants::DEFAULT_IMAGE_SEARCH_ENDPOINT.to_string()
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cx_id: String::new(),
            search_endpoint: default_search_endpoint(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl SearchPreferences {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        let mut preferences = Self::load_from_path(&settings_path)?;
        preferences.apply_overrides(|name| std::env::var(name).ok());
        Ok(preferences)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "[PREFERENCES] No settings file found, writing template to {:?}",
                settings_path
            );
            let default_preferences = Self::default();
            default_preferences.save_to_path(settings_path)?;
            return Ok(default_preferences);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let preferences: SearchPreferences = serde_json::from_str(&contents)?;

        log::info!("[PREFERENCES] Loaded preferences from {:?}", settings_path);
        log::debug!("[PREFERENCES] Search endpoint: {}", preferences.search_endpoint);

        Ok(preferences)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[PREFERENCES] Saved preferences to {:?}", settings_path);
        Ok(())
    }

    pub fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }

    /// Environment values win over the settings file when set and non-blank.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(global_constants::ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            log::debug!("[PREFERENCES] Using api key from {}", global_constants::ENV_API_KEY);
            self.api_key = api_key;
        }

        if let Some(cx_id) = lookup(global_constants::ENV_CX_ID).filter(|v| !v.trim().is_empty()) {
            log::debug!("[PREFERENCES] Using cx id from {}", global_constants::ENV_CX_ID);
            self.cx_id = cx_id;
        }
    }

    pub fn credentials(&self) -> PaletteResult<SearchCredentials> {
        if self.api_key.trim().is_empty() {
            return Err(PaletteError::MissingPreference("apiKey"));
        }

        if self.cx_id.trim().is_empty() {
            return Err(PaletteError::MissingPreference("cxId"));
        }

        Ok(SearchCredentials {
            api_key: self.api_key.trim().to_string(),
            cx_id: self.cx_id.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_preferences() -> SearchPreferences {
        SearchPreferences {
            api_key: "key-123".to_string(),
            cx_id: "cx-456".to_string(),
            ..SearchPreferences::default()
        }
    }

    #[test]
    fn test_default_preferences_use_google_endpoint() {
        let preferences = SearchPreferences::default();

        assert_eq!(
            preferences.search_endpoint,
            global_constants::DEFAULT_IMAGE_SEARCH_ENDPOINT
        );
        assert_eq!(preferences.theme_mode, ThemeMode::Dark);
        assert!(preferences.api_key.is_empty());
    }

    #[test]
    fn test_credentials_require_api_key_first() {
        let preferences = SearchPreferences::default();

        let error = preferences.credentials().unwrap_err();
        assert!(matches!(error, PaletteError::MissingPreference("apiKey")));
    }

    #[test]
    fn test_credentials_require_cx_id() {
        let preferences = SearchPreferences {
            api_key: "key".to_string(),
            cx_id: "   ".to_string(),
            ..SearchPreferences::default()
        };

        let error = preferences.credentials().unwrap_err();
        assert!(matches!(error, PaletteError::MissingPreference("cxId")));
    }

    #[test]
    fn test_credentials_when_both_present() {
        let credentials = filled_preferences().credentials().unwrap();

        assert_eq!(credentials.api_key, "key-123");
        assert_eq!(credentials.cx_id, "cx-456");
    }

    #[test]
    fn test_credentials_debug_hides_api_key() {
        let credentials = filled_preferences().credentials().unwrap();
        let rendered = format!("{:?}", credentials);

        assert!(!rendered.contains("key-123"));
        assert!(rendered.contains("cx-456"));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut preferences = filled_preferences();

        preferences.apply_overrides(|name| match name {
            global_constants::ENV_API_KEY => Some("env-key".to_string()),
            global_constants::ENV_CX_ID => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(preferences.api_key, "env-key");
        assert_eq!(preferences.cx_id, "cx-456");
    }

    #[test]
    fn test_deserialization_with_missing_optional_fields() {
        let json = r#"{ "api_key": "k", "cx_id": "c" }"#;
        let preferences: SearchPreferences = serde_json::from_str(json).unwrap();

        assert_eq!(
            preferences.search_endpoint,
            global_constants::DEFAULT_IMAGE_SEARCH_ENDPOINT
        );
        assert_eq!(preferences.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_load_from_missing_path_writes_template() {
        let temp_dir = std::env::temp_dir().join(format!(
            "image-search-palette-test-{}",
            uuid::Uuid::new_v4()
        ));
        let settings_path = temp_dir.join("settings.json");

        let preferences = SearchPreferences::load_from_path(&settings_path).unwrap();

        assert!(settings_path.exists());
        assert!(preferences.api_key.is_empty());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join(format!(
            "image-search-palette-test-{}",
            uuid::Uuid::new_v4()
        ));
        let settings_path = temp_dir.join("settings.json");

        let original = SearchPreferences {
            theme_mode: ThemeMode::Light,
            ..filled_preferences()
        };
        original.save_to_path(&settings_path).unwrap();

        let loaded = SearchPreferences::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded.api_key, original.api_key);
        assert_eq!(loaded.cx_id, original.cx_id);
        assert_eq!(loaded.theme_mode, ThemeMode::Light);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
