//! User settings stored as settings.json in the app data directory

use crate::catalog::Category;
use crate::constants::{DEFAULT_DECIMALS, MAX_DECIMALS, SETTINGS_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Last selection
    pub category: usize,
    pub from_unit: usize,
    pub to_unit: usize,

    // Display
    pub decimals: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            category: 0,
            from_unit: 0,
            to_unit: 0,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Settings>(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings.sanitized()
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Pull a hand-edited or stale file back inside the catalog's bounds
    pub fn sanitized(mut self) -> Self {
        let category = match Category::from_index(self.category) {
            Some(c) => c,
            None => {
                warn!(index = self.category, "Saved category out of range, resetting");
                self.category = 0;
                Category::ALL[0]
            }
        };
        let last = category.units().len() - 1;
        self.from_unit = self.from_unit.min(last);
        self.to_unit = self.to_unit.min(last);
        self.decimals = self.decimals.min(MAX_DECIMALS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("unit-converter-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn defaults_show_two_decimals_of_temperature() {
        let s = Settings::default();
        assert_eq!(s.decimals, 2);
        assert_eq!(s.category, Category::Temperature.index());
        // Both pickers start on the first unit
        assert_eq!((s.from_unit, s.to_unit), (0, 0));
    }

    #[test]
    fn save_then_load() {
        let dir = scratch_dir("roundtrip");
        let settings = Settings {
            window_w: Some(600.0),
            window_h: Some(400.0),
            category: 1,
            from_unit: 4,
            to_unit: 2,
            decimals: 3,
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
    }

    #[test]
    fn missing_or_corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        assert_eq!(Settings::load(&dir), Settings::default());

        std::fs::write(dir.join(SETTINGS_FILE_NAME), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join(SETTINGS_FILE_NAME), r#"{ "category": 2, "unknown": true }"#).unwrap();
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.category, 2);
        assert_eq!(loaded.decimals, DEFAULT_DECIMALS);
        assert_eq!(loaded.to_unit, 0);
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let s = Settings {
            category: 2, // Time, 3 units
            from_unit: 4,
            to_unit: 9,
            decimals: 42,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!((s.from_unit, s.to_unit, s.decimals), (2, 2, MAX_DECIMALS));

        let s = Settings { category: 17, ..Settings::default() }.sanitized();
        assert_eq!(s.category, 0);
    }
}
