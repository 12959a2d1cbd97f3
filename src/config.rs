use serde::Deserialize;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::theme::{ThemeMode, ThemeSetting};

/// Contents of the theme preferences file.
///
/// ```toml
/// theme = "light"
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeMode,
}

cfg_if::cfg_if!(
    if #[cfg(target_os = "macos")] {
        fn platform_config_path(home: Option<&Path>, _xdg_config_home: Option<&Path>) -> Option<PathBuf> {
            home.map(|home| home.join("Library/Preferences/theming-helper.toml"))
        }
    } else {
        fn platform_config_path(home: Option<&Path>, xdg_config_home: Option<&Path>) -> Option<PathBuf> {
            let config_directory = match xdg_config_home {
                Some(xdg) if xdg.is_absolute() => xdg.to_path_buf(),
                _ => home?.join(".config"),
            };
            Some(config_directory.join("theming-helper/config.toml"))
        }
    }
);

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

impl Config {
    /**
     * Location of the preferences file for the current platform, if a home
     * directory is known.
     */
    pub fn default_path() -> Option<PathBuf> {
        let home = env_path("HOME");
        let xdg_config_home = env_path("XDG_CONFIG_HOME");
        platform_config_path(home.as_deref(), xdg_config_home.as_deref())
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let content = read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded theme {} from {}", config.theme, path.display());
        Ok(config)
    }

    /**
     * Loads the preferences file from the default location. Any failure falls
     * back to the default config.
     */
    pub fn load() -> Config {
        let Some(path) = Config::default_path() else {
            log::debug!("No home directory, using default theme");
            return Config::default();
        };
        if !path.exists() {
            log::debug!("No config at {}, using default theme", path.display());
            return Config::default();
        }
        match Config::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}, using default theme");
                Config::default()
            }
        }
    }

    pub fn setting(&self) -> ThemeSetting {
        ThemeSetting::new(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_light() {
        let file = write_config("theme = \"LIGHT\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.setting().current(), ThemeMode::Light);
    }

    #[test]
    fn test_missing_key_is_dark() {
        let file = write_config("# nothing here\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_token_is_dark() {
        let file = write_config("theme = \"solarized\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("absent.toml");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let file = write_config("theme = \n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_platform_path_prefers_xdg() {
        let path = platform_config_path(Some(Path::new("/home/u")), Some(Path::new("/xdg")));
        assert_eq!(path, Some(PathBuf::from("/xdg/theming-helper/config.toml")));

        let path = platform_config_path(Some(Path::new("/home/u")), Some(Path::new("relative")));
        assert_eq!(
            path,
            Some(PathBuf::from("/home/u/.config/theming-helper/config.toml"))
        );

        assert_eq!(platform_config_path(None, None), None);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_platform_path_uses_preferences() {
        let path = platform_config_path(Some(Path::new("/Users/u")), None);
        assert_eq!(
            path,
            Some(PathBuf::from("/Users/u/Library/Preferences/theming-helper.toml"))
        );
    }
}
