//! Runtime settings
//!
//! Read once at startup from an optional JSON file in the working directory;
//! anything missing or malformed falls back to the defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory sprite images are loaded from
    pub assets_dir: String,
    /// Fixed session seed for reproducible runs; unset picks one from the clock
    pub seed: Option<u64>,
    /// Show the frame counter next to the banner
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_owned(),
            seed: None,
            show_fps: false,
        }
    }
}

impl Settings {
    const FILE: &'static str = "ghost-town.json";

    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {e}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.assets_dir, "assets");
        assert!(!settings.show_fps);
    }

    #[test]
    fn defaults_round_trip() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.assets_dir, Settings::default().assets_dir);
        assert_eq!(back.seed, None);
    }
}
