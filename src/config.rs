use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub window: WindowConfig,
    pub nav: NavConfig,
    pub history: HistoryConfig,
    pub theme: ThemeConfig,
}

/// Window configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    /// Initial window width (in pixels)
    pub width: f32,
    /// Initial window height (in pixels)
    pub height: f32,
}

/// Navigation configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NavConfig {
    /// Page shown at startup and reported when nothing is visible
    pub default_page: String,
}

/// Session history configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HistoryConfig {
    /// Enable back/forward navigation over visited pages
    pub enabled: bool,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowConfig {
                width: 900.0,
                height: 640.0,
            },
            nav: NavConfig {
                default_page: crate::content::DEFAULT_PAGE.to_string(),
            },
            history: HistoryConfig { enabled: false },
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "lifeguard") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("Failed to parse config file: {e}; using defaults");
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file: {e}; using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.nav.default_page, "home");
        assert!(!config.history.enabled);
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 900.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.nav.default_page, deserialized.nav.default_page);
        assert_eq!(config.history.enabled, deserialized.history.enabled);
    }
}
