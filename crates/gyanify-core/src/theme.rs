//! Light/dark theme flag with write-through persistence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::settings::SettingsStore;
use crate::{Error, Result};

/// Settings key holding the persisted theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::Settings(format!("unknown theme '{}'", other))),
        }
    }
}

/// Process-wide theme, handed to the renderer explicitly
pub struct ThemeState {
    mode: ThemeMode,
    store: Box<dyn SettingsStore>,
}

impl ThemeState {
    /// Read the persisted theme, falling back to `default` when it is missing
    /// or unreadable
    pub fn initialize(store: Box<dyn SettingsStore>, default: ThemeMode) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(value)) => value.parse::<ThemeMode>().unwrap_or_else(|e| {
                warn!("Ignoring persisted theme: {}", e);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!("Failed to read persisted theme: {}", e);
                default
            }
        };
        Self { mode, store }
    }

    #[inline]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the theme and persist it. The in-memory flag flips even when the
    /// write fails; the error is returned for the caller to report.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        self.set(self.mode.toggled())
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<ThemeMode> {
        self.mode = mode;
        info!("Theme set to {}", mode);
        self.store.set(THEME_KEY, mode.as_str())?;
        Ok(mode)
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState").field("mode", &self.mode).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;
    use std::sync::Arc;

    /// Store handle that can be inspected after being boxed into a ThemeState
    struct Shared(Arc<MemorySettingsStore>);

    impl SettingsStore for Shared {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.set(key, value)
        }
    }

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Settings("unavailable".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Settings("unavailable".to_string()))
        }
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_initialize_reads_persisted_value() {
        let store = MemorySettingsStore::with_value(THEME_KEY, "light");
        let state = ThemeState::initialize(Box::new(store), ThemeMode::Dark);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_initialize_falls_back_to_default() {
        let empty = ThemeState::initialize(Box::new(MemorySettingsStore::new()), ThemeMode::Light);
        assert_eq!(empty.mode(), ThemeMode::Light);

        let garbage = MemorySettingsStore::with_value(THEME_KEY, "sepia");
        let state = ThemeState::initialize(Box::new(garbage), ThemeMode::Dark);
        assert_eq!(state.mode(), ThemeMode::Dark);

        let failing = ThemeState::initialize(Box::new(FailingStore), ThemeMode::Light);
        assert_eq!(failing.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_writes_through() {
        let shared = Arc::new(MemorySettingsStore::new());
        let mut state = ThemeState::initialize(Box::new(Shared(shared.clone())), ThemeMode::Dark);

        assert_eq!(state.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(shared.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert_eq!(state.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(shared.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_even_when_persist_fails() {
        let mut state = ThemeState::initialize(Box::new(FailingStore), ThemeMode::Dark);
        assert!(state.toggle().is_err());
        assert_eq!(state.mode(), ThemeMode::Light);
    }
}
