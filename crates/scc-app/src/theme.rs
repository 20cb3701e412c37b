//! # Theme Manager
//!
//! Light/dark theme persisted under the `theme` key. Unknown stored values
//! fall back to light.

use std::str::FromStr;

use scc_store::{keys, StorageManager};

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// All themes.
    pub fn all() -> &'static [Theme] {
        &[Self::Light, Self::Dark]
    }

    /// Value of the `data-theme` attribute and of the stored key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other:?}; expected light or dark")),
        }
    }
}

/// Current theme plus its persistence.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    storage: StorageManager,
    current: Theme,
}

impl ThemeManager {
    /// Read the stored theme.
    pub fn load(storage: StorageManager) -> Self {
        let current = storage
            .load_string(keys::THEME)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        Self { storage, current }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.apply(self.current.toggled());
        self.current
    }

    /// Set a theme by name. Unknown names are logged and ignored.
    pub fn set(&mut self, name: &str) -> Option<Theme> {
        match name.parse::<Theme>() {
            Ok(theme) => {
                self.apply(theme);
                Some(theme)
            }
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        }
    }

    fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.storage.save_string(keys::THEME, theme.as_str());
        tracing::debug!(theme = theme.as_str(), "theme changed");
    }
}
