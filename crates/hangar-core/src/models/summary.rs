//! Plan summary model definition.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::TimelineWindow;

/// Aggregate view of a maintenance plan against its window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Aircraft the plan belongs to
    pub aircraft_id: String,

    /// Planning window
    pub window: TimelineWindow,

    /// Number of placed tasks
    pub task_count: usize,

    /// Number of buffers
    pub buffer_count: usize,

    /// Sum of task durations
    pub work: SignedDuration,

    /// Sum of buffer durations
    pub idle: SignedDuration,

    /// End of the last task, if any task is placed
    pub completes_at: Option<Timestamp>,

    /// Time left before the next mission (negative on overrun)
    pub slack: SignedDuration,

    /// Whether every task ends before the next mission
    pub fits_window: bool,

    /// Whether placements no longer follow list order (after a removal
    /// without re-flow)
    pub needs_reflow: bool,
}
