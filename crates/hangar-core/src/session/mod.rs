//! Planning sessions.
//!
//! A [`PlanningSession`] is one aircraft's maintenance plan: the selected
//! aircraft plus the [`Timeline`] it exclusively owns. Operations take the
//! shared parameter structs from [`crate::params`], translate them into
//! timeline calls, and return what changed so an interface can report it.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating sessions with configuration
//! - [`task_ops`]: Adding, moving and removing tasks
//! - [`buffer_ops`]: Growing and shrinking buffers
//! - [`store`]: JSON persistence of a session between CLI invocations
//!
//! # Usage Examples
//!
//! ```rust
//! use hangar_core::{
//!     params::{AddTask, MoveTask},
//!     Catalog, Fleet, SessionBuilder,
//! };
//!
//! let fleet = Fleet::builtin();
//! let catalog = Catalog::builtin();
//! let mut session = SessionBuilder::new()
//!     .with_aircraft(fleet.require("ac-101")?.clone())
//!     .build()?;
//!
//! let pump = session.add_task(&catalog, &AddTask { catalog_id: "rp-fuel-pump".into() })?;
//! let seal = session.add_task(&catalog, &AddTask { catalog_id: "rp-radome-seal".into() })?;
//! assert!(session.move_task(&MoveTask { task_id: seal.id, to_index: 0 }));
//! assert_eq!(session.timeline().tasks()[1].id, pump.id);
//! # hangar_core::Result::<()>::Ok(())
//! ```

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::{
    display::TimelineLayout,
    error::Result,
    models::{Aircraft, PlanSummary},
    params::ShowLayout,
    timeline::Timeline,
};

pub mod buffer_ops;
pub mod builder;
pub mod store;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use store::SessionStore;

/// One aircraft's maintenance plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanningSession {
    aircraft: Aircraft,
    timeline: Timeline,
}

impl PlanningSession {
    pub(crate) fn new(aircraft: Aircraft, timeline: Timeline) -> Self {
        Self { aircraft, timeline }
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Re-derives every placement from the current order and buffers.
    pub fn reflow(&mut self) {
        self.timeline.recompute();
    }

    /// Totals of the plan measured against the aircraft's window.
    pub fn summary(&self) -> PlanSummary {
        let timeline = &self.timeline;
        let window = *timeline.window();
        let work = timeline
            .tasks()
            .iter()
            .fold(SignedDuration::ZERO, |total, task| total + task.duration);
        let idle = timeline
            .buffers()
            .iter()
            .fold(SignedDuration::ZERO, |total, buffer| total + buffer.duration);
        let completes_at = timeline.completes_at();
        let slack = match completes_at {
            Some(end) => window.end.duration_since(end),
            None => window.length(),
        };

        PlanSummary {
            aircraft_id: self.aircraft.id.clone(),
            window,
            task_count: timeline.tasks().len(),
            buffer_count: timeline.buffers().len(),
            work,
            idle,
            completes_at,
            slack,
            fits_window: !slack.is_negative(),
            needs_reflow: !timeline.is_contiguous(),
        }
    }

    /// Projects tasks and buffers onto a vertical pixel axis.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if `pixels_per_hour` is not a
    /// positive finite number.
    pub fn layout(&self, params: &ShowLayout) -> Result<TimelineLayout> {
        TimelineLayout::project(&self.timeline, params.pixels_per_hour)
    }
}
