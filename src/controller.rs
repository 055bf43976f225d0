// src/controller.rs - Status controller: turns host notifications into M117 lines
use std::sync::Arc;

use crate::config::PluginConfig;
use crate::events::{FileOrigin, HostNotification, PrintEvent};
use crate::host::HostInterface;
use crate::progress::ProgressMonitor;

/// Drives the printer's status line from host notifications. Holds the
/// progress monitor and a handle to the host; no other mutable state.
pub struct StatusController<H: HostInterface> {
    host: Arc<H>,
    monitor: ProgressMonitor,
    config: PluginConfig,
}

impl<H: HostInterface> StatusController<H> {
    pub fn new(host: Arc<H>, config: PluginConfig) -> Self {
        Self {
            host,
            monitor: ProgressMonitor::new(),
            config,
        }
    }

    /// Entry point for the host dispatch loop. Never returns an error: a
    /// failed command submission is logged and swallowed.
    pub async fn handle_notification(&mut self, notification: HostNotification) {
        if !self.config.enabled {
            return;
        }
        match notification {
            HostNotification::CurrentData(data) => self.monitor.update(&data),
            HostNotification::Event(event) => self.on_event(event).await,
            HostNotification::ProgressTick {
                storage,
                path,
                progress,
            } => self.on_print_progress(storage, &path, progress).await,
        }
    }

    async fn on_event(&mut self, event: PrintEvent) {
        match event {
            PrintEvent::Started { origin, path } => {
                if origin == FileOrigin::SdCard {
                    if self.config.log_suppressed {
                        tracing::debug!("Ignoring SD card print start: {}", path);
                    }
                    return;
                }
                tracing::info!("Print started: {}", path);
                self.monitor.reset();
                self.set_progress(0.0, None).await;
            }
            PrintEvent::Done { origin, path } => {
                if origin == FileOrigin::SdCard {
                    if self.config.log_suppressed {
                        tracing::debug!("Ignoring SD card print done: {}", path);
                    }
                    return;
                }
                tracing::info!("Print finished: {}", path);
                self.set_progress(100.0, Some(0.0)).await;
            }
        }
    }

    // The integer percentage from the host feed is deliberately not used for
    // display; the time ratio from the last broadcast is more accurate.
    async fn on_print_progress(&mut self, storage: FileOrigin, path: &str, _progress: u8) {
        if !self.host.is_printing() {
            if self.config.log_suppressed {
                tracing::debug!("Ignoring progress tick for {} while not printing", path);
            }
            return;
        }
        if storage == FileOrigin::SdCard {
            if self.config.log_suppressed {
                tracing::debug!("Ignoring SD card progress tick: {}", path);
            }
            return;
        }

        let snapshot = self.monitor.snapshot();
        let time_left = snapshot.remaining_s;
        let progress = match (snapshot.elapsed_s, snapshot.remaining_s) {
            (Some(elapsed), Some(remaining)) => elapsed / (remaining + elapsed) * 100.0,
            _ => snapshot.completion.unwrap_or(0.0),
        };

        tracing::debug!("Progress tick for {}: {:.2}%", path, progress);
        self.set_progress(progress, time_left).await;
    }

    async fn set_progress(&self, progress: f64, time_left: Option<f64>) {
        let gcode = format_status(progress, time_left);
        if let Err(e) = self.host.send_command(&gcode).await {
            tracing::warn!("Failed to push status line '{}': {}", gcode, e);
        }
    }
}

/// Render the status-line command. With no remaining time the line is
/// `M117 P <pct>%`; with remaining time it is `M117 P<pct>% T<hrs>::<mins>`,
/// minutes and hours by integer floor division.
pub fn format_status(progress: f64, time_left: Option<f64>) -> String {
    match time_left {
        None => format!("M117 P {:.2}%", progress),
        Some(seconds) => {
            let mins = (seconds / 60.0).floor() as i64;
            let hrs = mins / 60;
            let mins = mins - hrs * 60;
            format!("M117 P{:.2}% T{}::{}", progress, hrs, mins)
        }
    }
}
