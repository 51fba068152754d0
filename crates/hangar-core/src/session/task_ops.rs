//! Task operations for the PlanningSession.

use log::debug;

use super::PlanningSession;
use crate::{
    catalog::Catalog,
    error::Result,
    models::Task,
    params::{AddTask, MoveTask, RemoveTask},
};

impl PlanningSession {
    /// Appends a new task copied from a catalog item.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::CatalogItemNotFound` if the catalog has no item
    /// with the requested ID.
    pub fn add_task(&mut self, catalog: &Catalog, params: &AddTask) -> Result<Task> {
        let item = catalog.require(&params.catalog_id)?;
        self.timeline.append(item)
    }

    /// Moves a task to a new position and re-flows the plan.
    ///
    /// Returns `false` if the task is unknown or the position is out of
    /// range.
    pub fn move_task(&mut self, params: &MoveTask) -> bool {
        let Some(from_index) = self.timeline.position(params.task_id) else {
            debug!("Ignoring move of unknown task {}", params.task_id);
            return false;
        };
        self.timeline
            .reorder(params.task_id, from_index, params.to_index)
    }

    /// Removes a task and its buffer, optionally re-flowing the rest.
    ///
    /// Returns the removed task, or `None` if it was not on the timeline.
    pub fn remove_task(&mut self, params: &RemoveTask) -> Option<Task> {
        let removed = self.timeline.delete_task(params.task_id)?;
        if params.reflow {
            self.timeline.recompute();
        }
        Some(removed)
    }
}
