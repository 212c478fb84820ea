//! Per-generation metrics.
//!
//! [`GenerationMetrics`] describes the work a single `propagate()` did. The
//! game keeps the most recent one for telemetry and benchmarking.

use egol_grid::Mode;

/// Work and timing of a single generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    /// Generation number after this step; the first step yields 1.
    pub generation: u64,
    /// Queued clicks applied before the step.
    pub clicks_applied: usize,
    /// Cells whose rule list was evaluated.
    pub candidates: usize,
    /// Cells that changed state.
    pub changes: usize,
    /// Wall-clock time for the whole step, in microseconds.
    pub elapsed_us: u64,
    /// Storage representation after the step.
    pub mode: Mode,
    /// Whether the step switched representation.
    pub mode_switched: bool,
}

impl GenerationMetrics {
    /// Whether the step did nothing: no candidates, so no changes.
    pub fn is_idle(&self) -> bool {
        self.candidates == 0
    }
}
