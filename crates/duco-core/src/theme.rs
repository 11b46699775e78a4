//! Light/dark theme preference.
//!
//! The initial theme comes from the stored preference when it is one we
//! recognize, otherwise from the platform's `prefers-color-scheme` signal.
//! Every change is applied to the page and written back to the store.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Page color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the theme attribute and the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::config(format!("unknown theme: {other}"))),
        }
    }
}

/// Opaque key-value store holding the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Where the active theme is applied.
pub trait ThemeTarget {
    fn apply(&mut self, theme: Theme);
}

/// Pick the initial theme.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(value) = stored {
        match value.parse() {
            Ok(theme) => return theme,
            Err(_) => tracing::warn!(stored = value, "ignoring unrecognized stored theme"),
        }
    }

    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Owns the current theme and keeps target and store in sync with it.
#[derive(Debug)]
pub struct ThemeSwitcher<S, T> {
    store: S,
    target: T,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeSwitcher<S, T> {
    /// Resolve, apply and persist the initial theme.
    pub fn init(store: S, target: T, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = store.get(&key);
        let current = resolve_initial(stored.as_deref(), prefers_dark);

        let mut switcher = Self {
            store,
            target,
            key,
            current,
        };
        switcher.commit();
        switcher
    }

    /// Flip the theme. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.commit();
        self.current
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn commit(&mut self) {
        self.target.apply(self.current);
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            tracing::warn!(error = %e, theme = %self.current, "failed to persist theme");
        }
    }
}

/// In-memory store, for pages without persistent storage and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "duco-theme";

    #[derive(Debug, Default)]
    struct RecordingTarget(Vec<Theme>);

    impl ThemeTarget for RecordingTarget {
        fn apply(&mut self, theme: Theme) {
            self.0.push(theme);
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(CoreError::storage("storage disabled"))
        }
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_resolve_initial() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn test_init_applies_and_persists() {
        let switcher = ThemeSwitcher::init(MemoryStore::new(), RecordingTarget::default(), KEY, true);

        assert_eq!(switcher.current(), Theme::Dark);
        assert_eq!(switcher.target().0, vec![Theme::Dark]);
        assert_eq!(switcher.store().get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_preference_wins() {
        let mut store = MemoryStore::new();
        store.set(KEY, "light").unwrap();

        let switcher = ThemeSwitcher::init(store, RecordingTarget::default(), KEY, true);
        assert_eq!(switcher.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut switcher =
            ThemeSwitcher::init(MemoryStore::new(), RecordingTarget::default(), KEY, false);

        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.store().get(KEY).as_deref(), Some("dark"));
        assert_eq!(switcher.toggle(), Theme::Light);
        assert_eq!(switcher.store().get(KEY).as_deref(), Some("light"));
        assert_eq!(
            switcher.target().0,
            vec![Theme::Light, Theme::Dark, Theme::Light]
        );
    }

    #[test]
    fn test_store_failure_does_not_block_toggle() {
        let mut switcher = ThemeSwitcher::init(FailingStore, RecordingTarget::default(), KEY, false);
        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.target().0.last(), Some(&Theme::Dark));
    }
}
