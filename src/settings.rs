//! Game settings
//!
//! Read-only configuration supplied by the host page (or a file for the
//! headless binary). Nothing is written back: sessions do not persist.

use serde::{Deserialize, Serialize};

use crate::sim::EntitySizes;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendered box sizes used for collision (pixels)
    pub sizes: EntitySizes,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence all tones
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no home bob, pulse or hit flash)
    pub reduced_motion: bool,

    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sizes: EntitySizes::default(),
            master_volume: 1.0,
            muted: false,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Element id of the inline JSON config block
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Clamp values into usable ranges
    pub fn sanitized(mut self) -> Self {
        self.master_volume = if self.master_volume.is_finite() {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.sizes = self.sizes.sanitized();
        self
    }

    /// Effective tone volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Whether transient visual cues should be shown
    pub fn effective_cues(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from the page's `<script id="game-config">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("No game config found, using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                settings
            }
            Err(e) => {
                log::warn!("Invalid game config ({e}), using default settings");
                Self::default()
            }
        }
    }

    /// Native: settings come from an optional file path
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings file {path}: {e}");
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings file {path} ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "seed": 7 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.sizes, EntitySizes::default());
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_volume_is_clamped() {
        let settings = Settings::from_json(r#"{ "master_volume": 3.5 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_reduced_motion_disables_cues() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_cues());
    }
}
