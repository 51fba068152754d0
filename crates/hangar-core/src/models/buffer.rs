//! Buffer model: an explicit idle gap anchored behind a task.

use std::{fmt, str::FromStr};

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// Position a buffer is attached to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Before the first task; only meaningful while the timeline is empty
    Start,

    /// Immediately after the task with this ID
    After(u64),
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("start") {
            return Ok(Anchor::Start);
        }
        s.parse::<u64>()
            .map(Anchor::After)
            .map_err(|_| format!("Invalid anchor: {s}. Expected a task ID or 'start'"))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => write!(f, "start"),
            Anchor::After(id) => write!(f, "task {id}"),
        }
    }
}

/// Idle time inserted after a task, sized in fixed increments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Buffer {
    /// Unique identifier of the buffer
    pub id: u64,

    /// Task the buffer follows
    pub anchor: Anchor,

    /// Length of the gap; always a positive multiple of the increment
    pub duration: SignedDuration,

    /// Start of the gap (the anchor task's end)
    pub start: Timestamp,
}

impl Buffer {
    /// End of the gap.
    pub fn end(&self) -> Timestamp {
        self.start + self.duration
    }
}

/// Outcome of a buffer edit that changed the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferChange {
    /// A new one-increment buffer was inserted
    Created(Buffer),

    /// An existing buffer grew or shrank by one increment
    Resized(Buffer),

    /// The buffer shrank to zero and was deleted
    Removed(Buffer),
}

impl BufferChange {
    /// The buffer as it stands after the edit (or as it was, if removed).
    pub fn buffer(&self) -> &Buffer {
        match self {
            BufferChange::Created(buffer)
            | BufferChange::Resized(buffer)
            | BufferChange::Removed(buffer) => buffer,
        }
    }
}
