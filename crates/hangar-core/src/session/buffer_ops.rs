//! Buffer operations for the PlanningSession.

use super::PlanningSession;
use crate::{models::BufferChange, params::EditBuffer};

impl PlanningSession {
    /// Adds one increment of idle time at the requested anchor.
    ///
    /// Returns `None` if the anchor task is not on the timeline, or if a
    /// start buffer is requested while tasks are placed.
    pub fn extend_buffer(&mut self, params: &EditBuffer) -> Option<BufferChange> {
        self.timeline.add_buffer(params.anchor)
    }

    /// Removes one increment of idle time at the requested anchor.
    ///
    /// Returns `None` if there is no buffer there.
    pub fn shrink_buffer(&mut self, params: &EditBuffer) -> Option<BufferChange> {
        self.timeline.decrement_buffer(params.anchor)
    }
}
