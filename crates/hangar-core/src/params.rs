//! Parameter structures for planning operations.
//!
//! These structures are shared by every interface driving a planning session
//! and carry no framework-specific derives. Interface layers define their own
//! wrapper types (for example clap `Args` structs in the CLI) and convert into
//! these through `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│ PlanningSession │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Anchor, TaskCategory};

/// Parameters for starting a planning session for one aircraft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartSession {
    /// ID of the aircraft to plan for
    pub aircraft_id: String,
    /// Buffer increment in minutes (defaults to 30)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_minutes: Option<u32>,
}

/// Parameters for listing catalog items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCatalog {
    /// Restrict the listing to one category
    #[serde(default)]
    pub category: Option<TaskCategory>,
}

/// Parameters for appending a task from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTask {
    /// Catalog item to instantiate
    pub catalog_id: String,
}

/// Parameters for moving a task to a new position (a drag-and-drop drop).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveTask {
    /// Task to move
    pub task_id: u64,
    /// Destination position (0-indexed)
    pub to_index: usize,
}

/// Parameters for removing a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveTask {
    /// Task to remove
    pub task_id: u64,
    /// Re-flow the remaining tasks to close the gap
    #[serde(default)]
    pub reflow: bool,
}

/// Parameters for growing or shrinking a buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditBuffer {
    /// Where the buffer sits
    pub anchor: Anchor,
}

/// Parameters for projecting the plan onto a pixel axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowLayout {
    /// Vertical scale of the planning surface
    pub pixels_per_hour: f64,
}

impl Default for ShowLayout {
    fn default() -> Self {
        Self {
            pixels_per_hour: 60.0,
        }
    }
}
