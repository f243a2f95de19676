//! Configuration management module.
//!
//! This module handles loading and saving the dashboard configuration,
//! including the data directory, gesture tuning and keyboard shortcuts.

mod error;
pub mod keymap;

pub use error::ConfigError;
pub use keymap::{format_binding_display, Keymap, PrimaryModifier, ShortcutAction};

use crate::error::AppResult;
use crate::input::desktop::CHORD_TIMEOUT_MS;
use crate::input::drag::LONG_PRESS_MS;
use crate::input::touch::{SwipeThresholds, DEFAULT_SWIPE_THRESHOLD};
use crate::state::PageId;
use crate::store::SYNC_POLL_MS;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/dashnav";
const DEFAULT_DATA_DIRECTORY_PATH: &str = ".local/share/dashnav";

/// Gesture and timer tuning.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default = "default_page_swipe_thresholds")]
    pub page_swipe_thresholds: HashMap<PageId, f64>,
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
    #[serde(default = "default_chord_timeout_ms")]
    pub chord_timeout_ms: u64,
    #[serde(default = "default_sync_poll_ms")]
    pub sync_poll_ms: u64,
}

fn default_swipe_threshold() -> f64 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_page_swipe_thresholds() -> HashMap<PageId, f64> {
    SwipeThresholds::default().per_page
}

fn default_long_press_ms() -> u64 {
    LONG_PRESS_MS
}

fn default_chord_timeout_ms() -> u64 {
    CHORD_TIMEOUT_MS
}

fn default_sync_poll_ms() -> u64 {
    SYNC_POLL_MS
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            swipe_threshold: default_swipe_threshold(),
            page_swipe_thresholds: default_page_swipe_thresholds(),
            long_press_ms: default_long_press_ms(),
            chord_timeout_ms: default_chord_timeout_ms(),
            sync_poll_ms: default_sync_poll_ms(),
        }
    }
}

impl GestureConfig {
    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            default: self.swipe_threshold,
            per_page: self.page_swipe_thresholds.clone(),
        }
    }
}

/// Oversees management of configuration file.
///
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub touch: Option<bool>,
    pub primary_modifier: PrimaryModifier,
    pub gestures: GestureConfig,
    pub keymap: Keymap,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub touch: Option<bool>,
    #[serde(default)]
    pub primary_modifier: PrimaryModifier,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub keymap: Keymap,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding defaults.
    ///
    pub fn new() -> Config {
        Config {
            data_dir: None,
            touch: None,
            primary_modifier: PrimaryModifier::default(),
            gestures: GestureConfig::default(),
            keymap: Keymap::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file is written out with the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_yaml(&contents)?;
            info!("Loaded configuration from {}", file_path.display());
        } else {
            match self.save() {
                Ok(()) => info!("Wrote default configuration to {}", file_path.display()),
                Err(e) => warn!("Using defaults, failed to write configuration: {}", e),
            }
        }

        Ok(())
    }

    /// Overwrite fields from a YAML document.
    ///
    pub fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.data_dir = data.data_dir;
        self.touch = data.touch;
        self.primary_modifier = data.primary_modifier;
        self.gestures = data.gestures;
        self.keymap = data.keymap;
        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            data_dir: self.data_dir.clone(),
            touch: self.touch,
            primary_modifier: self.primary_modifier,
            gestures: self.gestures.clone(),
            keymap: self.keymap.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        fs::write(file_path, content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Directory holding persisted dashboard state.
    ///
    pub fn resolved_data_dir(&self) -> AppResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => match dirs::home_dir() {
                Some(home) => Ok(home.join(DEFAULT_DATA_DIRECTORY_PATH)),
                None => Err(ConfigError::HomeDirectoryNotFound.into()),
            },
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("dashnav-config-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.gestures.swipe_threshold, 80.0);
        assert_eq!(config.gestures.long_press_ms, 500);
        assert_eq!(config.gestures.chord_timeout_ms, 1000);
        assert_eq!(config.gestures.sync_poll_ms, 1000);
        assert_eq!(config.gestures.swipe_thresholds().for_page(PageId::Tmdb), 120.0);
        assert_eq!(config.touch, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut config = Config::new();
        config
            .apply_yaml("touch: true\nprimary_modifier: super\ngestures:\n  swipe_threshold: 60\n")
            .unwrap();
        assert_eq!(config.touch, Some(true));
        assert_eq!(config.primary_modifier, PrimaryModifier::Super);
        assert_eq!(config.gestures.swipe_threshold, 60.0);
        assert_eq!(config.gestures.long_press_ms, 500);
        assert_eq!(config.keymap, Keymap::default());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let mut config = Config::new();
        let result = config.apply_yaml("gestures: [1, 2");
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.gestures, GestureConfig::default());
        assert!(dir.join(FILE_NAME).exists());

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.gestures, GestureConfig::default());
        assert_eq!(reloaded.keymap, Keymap::default());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_reads_file_from_custom_directory() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "touch: false\nprimary_modifier: control\ngestures:\n  swipe_threshold: 90.0\n  \
             page_swipe_thresholds:\n    tmdb: 150.0\n  long_press_ms: 450\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.touch, Some(false));
        assert_eq!(config.primary_modifier, PrimaryModifier::Control);
        let thresholds = config.gestures.swipe_thresholds();
        assert_eq!(thresholds.for_page(PageId::Tmdb), 150.0);
        assert_eq!(thresholds.for_page(PageId::Rss), 90.0);
        assert_eq!(config.gestures.long_press_ms, 450);
        assert_eq!(config.gestures.chord_timeout_ms, 1000);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.touch = Some(false);
        config.gestures.long_press_ms = 650;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.touch, Some(false));
        assert_eq!(reloaded.gestures.long_press_ms, 650);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_explicit_data_dir() {
        let mut config = Config::new();
        config.data_dir = Some(PathBuf::from("/tmp/dashnav-data"));
        assert_eq!(
            config.resolved_data_dir().unwrap(),
            PathBuf::from("/tmp/dashnav-data")
        );
    }
}
