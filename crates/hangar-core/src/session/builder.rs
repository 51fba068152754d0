//! Builder for creating and configuring planning sessions.

use jiff::SignedDuration;
use log::info;

use super::PlanningSession;
use crate::{
    error::{HangarError, Result},
    models::Aircraft,
    params::StartSession,
    timeline::{Timeline, DEFAULT_BUFFER_INCREMENT},
    Fleet,
};

/// Builder for creating and configuring PlanningSession instances.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    aircraft: Option<Aircraft>,
    buffer_increment: SignedDuration,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            aircraft: None,
            buffer_increment: DEFAULT_BUFFER_INCREMENT,
        }
    }

    /// Creates a builder for the aircraft named in `params`, resolved
    /// against `fleet`.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::AircraftNotFound` if the fleet has no such
    /// aircraft.
    pub fn from_params(fleet: &Fleet, params: &StartSession) -> Result<Self> {
        let aircraft = fleet.require(&params.aircraft_id)?.clone();
        let builder = Self::new().with_aircraft(aircraft);
        Ok(match params.buffer_minutes {
            Some(minutes) => builder.with_buffer_increment(SignedDuration::from_mins(minutes.into())),
            None => builder,
        })
    }

    /// Sets the aircraft whose availability window bounds the plan.
    pub fn with_aircraft(mut self, aircraft: Aircraft) -> Self {
        self.aircraft = Some(aircraft);
        self
    }

    /// Sets the step by which buffers grow and shrink.
    ///
    /// If not specified, buffers move in 30 minute steps.
    pub fn with_buffer_increment(mut self, increment: SignedDuration) -> Self {
        self.buffer_increment = increment;
        self
    }

    /// Builds the configured session with an empty timeline.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::Configuration` if no aircraft was set
    /// Returns `HangarError::InvalidInput` if the aircraft's window is
    /// inverted or the buffer increment is not positive
    pub fn build(self) -> Result<PlanningSession> {
        let aircraft = self.aircraft.ok_or_else(|| HangarError::Configuration {
            message: "A planning session requires an aircraft".to_string(),
        })?;

        let window = aircraft.window()?;
        let timeline = Timeline::new(window, self.buffer_increment)?;

        info!(
            "Started planning session for {} ({}) from {} to {}",
            aircraft.id, aircraft.tail_number, window.start, window.end
        );
        Ok(PlanningSession::new(aircraft, timeline))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
