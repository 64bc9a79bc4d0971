//! Game settings and preferences
//!
//! Persisted as a small JSON file in the working directory; a missing
//! or unreadable file falls back to defaults.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_HZ;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Milliseconds between enemy spawns
    pub spawn_interval_ms: u32,

    // === Visual effects ===
    /// Render the particle bursts (the simulation spawns them
    /// regardless, so scoring is unaffected)
    pub particles: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Reproducibility ===
    /// Fixed RNG seed; a fresh random seed is drawn when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1000,
            particles: true,
            show_fps: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    const SETTINGS_FILE: &'static str = "chroma-blitz.json";

    /// Spawn interval converted to whole ticks (at least one)
    pub fn spawn_interval_ticks(&self) -> u32 {
        let ticks = u64::from(self.spawn_interval_ms) * u64::from(TICK_HZ) / 1000;
        ticks.clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Load settings from the JSON file, defaults when absent/invalid
    pub fn load() -> Self {
        match fs::read_to_string(Self::SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::SETTINGS_FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::SETTINGS_FILE);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to the JSON file
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(Self::SETTINGS_FILE, json) {
                    log::warn!("Could not write {}: {err}", Self::SETTINGS_FILE);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
