//! Task model definition and related functionality.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::{CatalogItem, Priority, TaskCategory};

/// A unit of maintenance work placed on a timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier of this placement
    pub id: u64,

    /// Identifier of the catalog item this task was created from
    pub catalog_id: String,

    /// Short title of the work
    pub title: String,

    /// Kind of maintenance work
    pub category: TaskCategory,

    /// Estimated duration of the work
    pub duration: SignedDuration,

    /// Free-form description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Informational priority
    #[serde(default)]
    pub priority: Priority,

    /// Scheduled start, derived by the layout engine
    pub start: Timestamp,

    /// Scheduled end (`start + duration`), derived by the layout engine
    pub end: Timestamp,
}

impl Task {
    /// Instantiates a task from a catalog item at the given start.
    pub(crate) fn from_catalog(
        id: u64,
        item: &CatalogItem,
        duration: SignedDuration,
        start: Timestamp,
    ) -> Self {
        Self {
            id,
            catalog_id: item.id.clone(),
            title: item.title.clone(),
            category: item.category,
            duration,
            description: item.description.clone(),
            priority: item.priority,
            start,
            end: start + duration,
        }
    }

    /// Places the task at `start`, keeping its duration.
    pub(crate) fn place_at(&mut self, start: Timestamp) {
        self.start = start;
        self.end = start + self.duration;
    }

    /// Moves the task by a signed offset.
    pub(crate) fn shift(&mut self, offset: SignedDuration) {
        self.place_at(self.start + offset);
    }
}
