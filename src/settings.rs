use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "RANDOMIZER_SETTINGS";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Window placement as stored by [`crate::placement::encode`]. Absent on
    /// first run.
    #[serde(default)]
    pub main_window_placement: Option<String>,
    #[serde(default = "default_true")]
    pub keep_on_top: bool,
    #[serde(default = "default_true")]
    pub show_in_taskbar: bool,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Initial inner size used when no placement has been stored yet.
    #[serde(default = "default_window_size")]
    pub window_size: (i32, i32),
}

fn default_true() -> bool {
    true
}

fn default_window_size() -> (i32, i32) {
    (160, 120)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            main_window_placement: None,
            keep_on_top: true,
            show_in_taskbar: true,
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}

/// Location of the settings file.
///
/// `RANDOMIZER_SETTINGS` wins, then the per-user config directory, then
/// `settings.json` in the working directory.
pub fn settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .map(|dir| dir.join("Randomizer").join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}
