//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of timeline
//! mutations with consistent messaging and resource display.

use std::fmt;

use super::datetime::HoursMinutes;
use crate::models::{BufferChange, Task};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use hangar_core::{display::CreateResult, params::AddTask, Catalog, Fleet, SessionBuilder};
///
/// let mut session = SessionBuilder::new()
///     .with_aircraft(Fleet::builtin().require("ac-101")?.clone())
///     .build()?;
/// let task = session.add_task(&Catalog::builtin(), &AddTask { catalog_id: "rp-fuel-pump".into() })?;
///
/// let output = CreateResult::new(task).to_string();
/// assert!(output.contains("Added task with ID: 1"));
/// # hangar_core::Result::<()>::Ok(())
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a removed task.
pub struct DeleteResult<T> {
    pub resource: T,
    pub reflowed: bool,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T, reflowed: bool) -> Self {
        Self { resource, reflowed }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed task {}: {}",
            self.resource.id, self.resource.title
        )?;
        if self.reflowed {
            writeln!(f, "Remaining tasks were re-flowed.")
        } else {
            writeln!(f, "Remaining tasks keep their placement.")
        }
    }
}

impl fmt::Display for BufferChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer();
        match self {
            BufferChange::Created(_) => writeln!(
                f,
                "Inserted buffer {} at {} ({})",
                buffer.id,
                buffer.anchor,
                HoursMinutes(buffer.duration)
            ),
            BufferChange::Resized(_) => writeln!(
                f,
                "Buffer {} at {} is now {}",
                buffer.id,
                buffer.anchor,
                HoursMinutes(buffer.duration)
            ),
            BufferChange::Removed(_) => {
                writeln!(f, "Removed buffer {} at {}", buffer.id, buffer.anchor)
            }
        }
    }
}
