// src/lib.rs - LazyProgress: pushes a percent-complete status line to the
// printer display on every progress tick.
pub mod config;
pub mod controller;
pub mod events;
pub mod host;
pub mod progress;
pub mod update;

pub use controller::{format_status, StatusController};
pub use events::{FileOrigin, HostNotification, PrintEvent, PrintProgressData};
pub use host::{HostError, HostInterface};
pub use progress::{ProgressMonitor, ProgressSnapshot};

use tokio::sync::mpsc;

/// Consume the host notification channel and dispatch to the controller,
/// one notification at a time. Runs until the host drops its sender.
pub async fn run<H: HostInterface>(
    mut controller: StatusController<H>,
    mut notifications: mpsc::Receiver<HostNotification>,
) {
    while let Some(notification) = notifications.recv().await {
        controller.handle_notification(notification).await;
    }
    tracing::info!("Host notification channel closed, plugin stopping");
}
