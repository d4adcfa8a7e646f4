pub mod theme;

use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::constants::base_path;
pub use theme::{Theme, ThemeMode};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub default_preset: Option<usize>,
}

#[allow(dead_code)]
impl Settings {
    pub const DEFAULT_DELAY_MS: u64 = 40;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, value: ThemeMode) -> Self {
        self.theme = Some(value);
        self
    }

    pub fn get_theme(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }

    pub fn set_animate(mut self, value: bool) -> Self {
        self.animate = Some(value);
        self
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or(true)
    }

    pub fn set_delay_ms(mut self, value: u64) -> Self {
        self.delay_ms = Some(value);
        self
    }

    pub fn get_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or(Self::DEFAULT_DELAY_MS))
    }

    pub fn set_default_preset(mut self, value: usize) -> Self {
        self.default_preset = Some(value);
        self
    }

    pub fn get_default_preset(&self) -> Option<usize> {
        self.default_preset
    }

    pub fn default_path() -> PathBuf {
        base_path().join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_str(source: &str) -> Result<Self, ron::error::SpannedError> {
        Self::options().from_str(source)
    }

    /// Loads settings from `path`, writing the defaults there if the file doesn't exist yet.
    ///
    /// Unreadable or invalid files are reported and replaced by defaults in memory only.
    pub fn load(path: PathBuf) -> Self {
        match fs::read_to_string(&path) {
            Ok(settings_string) => match Self::from_str(&settings_string) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("Error reading settings file ({:?}), {}", path, err);
                    Self::defaults()
                }
            },
            Err(_) => {
                Self::reset_config(path);
                Self::defaults()
            }
        }
    }

    pub fn reset_config(path: PathBuf) {
        let written = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| fs::write(&path, DEFAULT_SETTINGS));

        if let Err(err) = written {
            log::warn!("Could not write default settings to {:?}, {}", path, err);
        }
    }

    fn defaults() -> Self {
        Self::from_str(DEFAULT_SETTINGS).unwrap_or_default()
    }
}
