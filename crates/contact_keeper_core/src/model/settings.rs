//! Settings-screen preferences.
//!
//! Two independent boolean flags. Neither is persisted nor propagated to
//! other components; they only back their own switch.

use serde::{Deserialize, Serialize};

/// Identifies one preference switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    DarkMode,
    Notifications,
}

impl SettingKey {
    /// Parses the snake_case wire name used by the UI host.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark_mode" => Some(Self::DarkMode),
            "notifications" => Some(Self::Notifications),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications_enabled: true,
        }
    }
}

impl AppSettings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::Notifications => self.notifications_enabled,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::DarkMode => self.dark_mode = value,
            SettingKey::Notifications => self.notifications_enabled = value,
        }
    }

    /// Flips one flag and returns its new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let next = !self.get(key);
        self.set(key, next);
        next
    }
}
