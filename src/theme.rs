use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

const LIGHT_TOKEN: &str = "Light";

/// The two supported theme modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /**
     * Converts a mode token to a ThemeMode.
     *
     * Only a case-insensitive match of "Light" yields Light. Everything else,
     * including a missing token, falls back to Dark.
     */
    pub fn parse(token: Option<&str>) -> ThemeMode {
        match token {
            Some(value) if value.eq_ignore_ascii_case(LIGHT_TOKEN) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(ThemeMode::parse(Some(value)))
    }
}

impl Serialize for ThemeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThemeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = Option::<String>::deserialize(deserializer)?;
        Ok(ThemeMode::parse(token.as_deref()))
    }
}

/**
 * Holds the currently selected theme mode.
 */
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeSetting {
    current: ThemeMode,
}

impl ThemeSetting {
    pub fn new(current: ThemeMode) -> ThemeSetting {
        ThemeSetting { current }
    }

    /**
     * Builds a setting from a mode token, see `ThemeMode::parse`.
     */
    pub fn from_string(token: Option<&str>) -> ThemeSetting {
        ThemeSetting::new(ThemeMode::parse(token))
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn set_current(&mut self, mode: ThemeMode) {
        self.current = mode;
    }
}

impl From<ThemeMode> for ThemeSetting {
    fn from(mode: ThemeMode) -> Self {
        ThemeSetting::new(mode)
    }
}
