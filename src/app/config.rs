use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::error::ConfigError;
use crate::ui_constants::{self, Palette};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &ui_constants::LIGHT,
            Theme::Dark => &ui_constants::DARK,
        }
    }
}

fn default_window_width() -> f32 {
    ui_constants::DEFAULT_WINDOW_SIZE[0]
}

fn default_window_height() -> f32 {
    ui_constants::DEFAULT_WINDOW_SIZE[1]
}

fn default_resizable() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("log.txt")
}

/// Window and logging settings. Read once at start-up; the counter itself is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_resizable")]
    pub resizable: bool,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            resizable: default_resizable(),
            theme: Theme::default(),
            log_file: default_log_file(),
        }
    }
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

pub fn config_file_path() -> PathBuf {
    if let Ok(p) = std::env::var("COUNTER_CARD_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("counter_card.json")
}

impl AppConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = serde_json::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.window_width) || !ok(self.window_height) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    pub fn window_size(&self) -> [f32; 2] {
        [self.window_width, self.window_height]
    }
}

/// Loads the config file into `APP_CONFIG`. A missing or broken file keeps the defaults.
pub fn load_config_from_disk() {
    let path = config_file_path();
    if !path.exists() {
        log::info!("No config at {}; using defaults", path.to_string_lossy());
        return;
    }
    match AppConfig::load_from_file(&path) {
        Ok(cfg) => {
            if let Ok(mut slot) = APP_CONFIG.write() {
                *slot = cfg;
            }
            log::info!("Loaded config from {}", path.to_string_lossy());
        }
        Err(e) => {
            log::warn!(
                "Using default config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

/// Read the global config through a closure.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&AppConfig) -> R,
{
    match APP_CONFIG.read() {
        Ok(cfg) => f(&cfg),
        Err(poisoned) => f(&poisoned.into_inner()),
    }
}
