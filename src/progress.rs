// src/progress.rs - Last-known progress snapshot
use crate::events::PrintProgressData;

/// The three last-known progress values from the host's status broadcaster.
/// All optional: the host may not know any of them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressSnapshot {
    pub completion: Option<f64>,
    pub elapsed_s: Option<f64>,
    pub remaining_s: Option<f64>,
}

/// Records the most recent status broadcast. Overwritten in place on every
/// broadcast and reset to all-unset at the start of each print job.
#[derive(Debug, Default)]
pub struct ProgressMonitor {
    snapshot: ProgressSnapshot,
}

impl ProgressMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all three fields to unset.
    pub fn reset(&mut self) {
        self.snapshot = ProgressSnapshot::default();
    }

    /// Overwrite the stored fields with the incoming values. No validation;
    /// absent fields propagate as unset.
    pub fn update(&mut self, data: &PrintProgressData) {
        self.snapshot.completion = data.completion;
        self.snapshot.elapsed_s = data.print_time;
        self.snapshot.remaining_s = data.print_time_left;
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot
    }
}
