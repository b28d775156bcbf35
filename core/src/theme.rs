use std::collections::HashMap;
use std::fmt;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Reads a root attribute value; only the literal `"dark"` counts as dark.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError {
                found: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    pub found: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}', expected 'light' or 'dark'", self.found)
    }
}

impl std::error::Error for ParseThemeError {}

/// Durable string key-value storage the theme preference is written to.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persisted preference, defaulting to light when missing or unreadable.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    store
        .read(THEME_STORAGE_KEY)
        .and_then(|raw| raw.trim().parse::<Theme>().ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &mut impl PreferenceStore, theme: Theme) -> Result<(), String> {
    store.write(THEME_STORAGE_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_is_light() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn garbage_preference_is_light() {
        let mut store = MemoryStore::new();
        store.write(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn parse_error_names_value() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme 'Dark', expected 'light' or 'dark'");
    }

    #[test]
    fn attribute_reading_is_strict() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_attribute(None), Theme::Light);
    }
}
