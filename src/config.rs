//! Difficulty tuning and player settings
//!
//! Difficulty is read once when a session starts and resolved into a
//! [`Tuning`]; there is no mid-session switch. Settings are persisted
//! separately in LocalStorage.

use serde::{Deserialize, Serialize};

/// Binary difficulty toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Resolve the speed/size constants for this difficulty
    pub fn tuning(&self) -> Tuning {
        match self {
            Difficulty::Easy => Tuning {
                target_radius: 25.0,
                cluster_speed: 0.5,
                projectile_speed: 5.0,
            },
            Difficulty::Hard => Tuning {
                target_radius: 15.0,
                cluster_speed: 1.5,
                projectile_speed: 8.0,
            },
        }
    }
}

/// Constants fixed for a whole session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Drawn radius of targets, projectile and preview
    pub target_radius: f32,
    /// Lateral displacement scale of the cluster (pixels per frame at peak)
    pub cluster_speed: f32,
    /// Projectile displacement per frame
    pub projectile_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Difficulty::default().tuning()
    }
}

/// Player settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty applied to the next session
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "frogshot_settings";

    /// Parse persisted JSON, falling back to defaults on anything malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Copy with a URL query applied on top. The stored settings stay
    /// untouched, so the override lasts for this page load only.
    pub fn with_query(&self, query: &str) -> Self {
        let mut settings = self.clone();
        settings.apply_query(query);
        settings
    }

    /// Apply a `mode=easy|hard` pair from a URL query string
    pub fn apply_query(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        for pair in query.split('&') {
            if let Some(("mode", value)) = pair.split_once('=') {
                match Difficulty::from_str(value) {
                    Some(difficulty) => self.difficulty = difficulty,
                    None => log::warn!("Unknown mode '{}' in query", value),
                }
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        match storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten()) {
            Some(json) => {
                log::info!("Loaded settings from LocalStorage");
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved ({})", self.difficulty.as_str());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
