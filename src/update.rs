// src/update.rs - Self-update descriptor for the host's update checker
use serde::Serialize;

/// Key the host's update checker looks the plugin up under.
pub const PLUGIN_NAME: &str = "LazyProgress";

pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release-hosting metadata consumed by the host's optional software-update
/// facility. Field names follow the wire format the checker expects.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateInformation {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "displayVersion")]
    pub display_version: String,
    /// Version-check mechanism, here a GitHub release feed.
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
    pub repo: String,
    pub current: String,
    /// Install-source URL template; `{target_version}` is substituted by the
    /// checker.
    pub pip: String,
}

impl Default for UpdateInformation {
    fn default() -> Self {
        Self {
            display_name: "LazyProgress Plugin".to_string(),
            display_version: PLUGIN_VERSION.to_string(),
            kind: "github_release".to_string(),
            user: "D4ve-R".to_string(),
            repo: "OctoPrint-LazyProgress".to_string(),
            current: PLUGIN_VERSION.to_string(),
            pip: "https://github.com/D4ve-R/OctoPrint-LazyProgress/archive/{target_version}.zip"
                .to_string(),
        }
    }
}

/// The descriptor map handed to the host, keyed by plugin name.
pub fn update_information() -> serde_json::Value {
    serde_json::json!({ PLUGIN_NAME: UpdateInformation::default() })
}
