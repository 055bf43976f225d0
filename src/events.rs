// src/events.rs - Host notification types consumed by the plugin
use serde::{Deserialize, Serialize};

/// Where the file being printed lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOrigin {
    /// Host-managed storage.
    Local,
    /// Printer-firmware-managed SD card. Progress for these prints is
    /// reported by the firmware itself, so the plugin stays quiet.
    SdCard,
}

/// Progress fields from one host status broadcast. Any of them may be
/// missing; absent fields overwrite stored values with unset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PrintProgressData {
    /// Completion percentage reported by the host, 0-100.
    pub completion: Option<f64>,
    /// Elapsed print time in seconds.
    pub print_time: Option<f64>,
    /// Estimated remaining print time in seconds.
    pub print_time_left: Option<f64>,
}

/// Print lifecycle events the plugin reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintEvent {
    Started { origin: FileOrigin, path: String },
    Done { origin: FileOrigin, path: String },
}

/// Everything the host dispatch loop can hand the plugin.
#[derive(Debug, Clone)]
pub enum HostNotification {
    /// Periodic status broadcast from the printer state poller.
    CurrentData(PrintProgressData),
    /// Lifecycle event from the host event bus.
    Event(PrintEvent),
    /// Progress tick from the host progress feed.
    ProgressTick {
        storage: FileOrigin,
        path: String,
        progress: u8,
    },
}
