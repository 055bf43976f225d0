// src/host.rs - Seam to the host application
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Command channel closed: {0}")]
    ChannelClosed(String),
    #[error("Printer rejected command: {0}")]
    Rejected(String),
}

/// The slice of the host application the plugin talks to. The host owns the
/// printer connection and the event dispatch path; it invokes plugin handlers
/// sequentially, one notification at a time.
#[async_trait]
pub trait HostInterface: Send + Sync {
    /// Print-state query: is a print currently running.
    fn is_printing(&self) -> bool;

    /// Submit one firmware command string to the printer.
    async fn send_command(&self, gcode: &str) -> Result<(), HostError>;
}
