//! Aircraft and timeline window definitions.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{HangarError, Result};

/// Fixed bounds of a planning session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineWindow {
    /// When the aircraft becomes available for maintenance
    pub start: Timestamp,

    /// When the aircraft's next mission begins
    pub end: Timestamp,
}

impl TimelineWindow {
    /// Creates a window, rejecting one that ends before it starts.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if `end < start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if end < start {
            return Err(HangarError::invalid_input("next_mission_at").with_reason(format!(
                "Next mission at {end} precedes aircraft availability at {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Total time between availability and the next mission.
    pub fn length(&self) -> SignedDuration {
        self.end.duration_since(self.start)
    }
}

/// An aircraft that can be selected for maintenance planning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Aircraft {
    /// Fleet identifier used for selection
    pub id: String,

    /// Registration / tail number
    pub tail_number: String,

    /// Airframe model
    pub model: String,

    /// When the aircraft becomes available for maintenance
    pub available_at: Timestamp,

    /// When the aircraft's next mission begins
    pub next_mission_at: Timestamp,
}

impl Aircraft {
    /// The planning window for this aircraft.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if the next mission precedes
    /// availability.
    pub fn window(&self) -> Result<TimelineWindow> {
        TimelineWindow::new(self.available_at, self.next_mission_at)
    }
}
