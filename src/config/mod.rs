//! Settings provider
//!
//! The services consume current site settings through the `SettingsManager`
//! collaborator. Where the settings actually live (database, file, admin UI)
//! is outside this layer; `StaticSettingsManager` covers embedders that load
//! settings once at startup, and tests.

use serde::{Deserialize, Serialize};

/// Site settings the service layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Rows per page for topic listings
    #[serde(default = "default_topics_per_page")]
    pub topics_per_page: i32,
    /// Whether newly uploaded user images start out approved
    #[serde(default)]
    pub is_new_user_image_approved: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            topics_per_page: default_topics_per_page(),
            is_new_user_image_approved: false,
        }
    }
}

fn default_topics_per_page() -> i32 {
    20
}

/// Access to the current settings snapshot.
pub trait SettingsManager: Send + Sync {
    fn current(&self) -> Settings;
}

/// Settings manager over a fixed snapshot.
pub struct StaticSettingsManager {
    settings: Settings,
}

impl StaticSettingsManager {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsManager for StaticSettingsManager {
    fn current(&self) -> Settings {
        self.settings.clone()
    }
}
