//! Task placement: first-fit append, reorder and removal.

use jiff::{SignedDuration, Timestamp};
use log::debug;

use super::Timeline;
use crate::{
    error::{HangarError, Result},
    models::{Anchor, CatalogItem, Task},
};

impl Timeline {
    /// Appends a new task instantiated from `item`.
    ///
    /// The task gets a fresh ID, so appending the same catalog item twice
    /// yields two independent tasks. Placement is first-fit: the candidate
    /// starts at the window origin and jumps past every task or buffer it
    /// overlaps until a free slot is found. The task list is then re-sorted
    /// by start.
    ///
    /// A "start" buffer only exists on an empty timeline and is dropped once
    /// the first task is placed, so the first task always begins at the
    /// window origin.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if the item's estimate cannot be
    /// converted into a positive duration, or if the task would end past the
    /// latest representable timestamp.
    pub fn append(&mut self, item: &CatalogItem) -> Result<Task> {
        let duration = item.duration()?;
        let start = self.first_fit(duration)?;

        if self.tasks.is_empty() {
            self.buffers.retain(|buffer| buffer.anchor != Anchor::Start);
        }

        let id = self.next_task_id();
        let task = Task::from_catalog(id, item, duration, start);
        debug!(
            "Placed task {} ('{}') at {} for {:?}",
            task.id, task.title, task.start, task.duration
        );

        self.tasks.push(task.clone());
        self.tasks.sort_by_key(|task| task.start);
        Ok(task)
    }

    /// Moves a task from `from_index` to `to_index`, then recomputes every
    /// placement.
    ///
    /// Returns `false` without changes if either index is out of range or
    /// the task at `from_index` is not `task_id`.
    pub fn reorder(&mut self, task_id: u64, from_index: usize, to_index: usize) -> bool {
        let len = self.tasks.len();
        if from_index >= len || to_index >= len {
            debug!("Ignoring reorder of task {task_id}: index {from_index} -> {to_index} outside 0..{len}");
            return false;
        }
        if self.tasks[from_index].id != task_id {
            debug!("Ignoring reorder of task {task_id}: position {from_index} holds another task");
            return false;
        }

        let task = self.tasks.remove(from_index);
        self.tasks.insert(to_index, task);
        self.recompute();
        debug!("Moved task {task_id} from position {from_index} to {to_index}");
        true
    }

    /// Removes a task and any buffer anchored to it.
    ///
    /// Other tasks keep their placement; call [`Timeline::recompute`] to
    /// close the hole.
    pub fn delete_task(&mut self, task_id: u64) -> Option<Task> {
        let Some(index) = self.position(task_id) else {
            debug!("Ignoring removal of unknown task {task_id}");
            return None;
        };

        let task = self.tasks.remove(index);
        self.buffers
            .retain(|buffer| buffer.anchor != Anchor::After(task_id));
        debug!("Removed task {task_id} ('{}')", task.title);
        Some(task)
    }

    /// Earliest start at or after the window origin where `duration` fits
    /// without overlapping a placed task or buffer.
    fn first_fit(&self, duration: SignedDuration) -> Result<Timestamp> {
        let mut start = self.window.start;
        loop {
            let end = start.checked_add(duration).map_err(|e| {
                HangarError::invalid_input("estimated_hours")
                    .with_reason(format!("A task starting at {start} cannot end: {e}"))
            })?;
            let blocker = self
                .occupied()
                .filter(|(busy_start, busy_end)| start < *busy_end && *busy_start < end)
                .map(|(_, busy_end)| busy_end)
                .max();
            match blocker {
                Some(busy_end) => start = busy_end,
                None => return Ok(start),
            }
        }
    }

    /// Intervals held by tasks and by buffers that follow a task.
    fn occupied(&self) -> impl Iterator<Item = (Timestamp, Timestamp)> + '_ {
        let tasks = self.tasks.iter().map(|task| (task.start, task.end));
        let buffers = self
            .buffers
            .iter()
            .filter(|buffer| matches!(buffer.anchor, Anchor::After(_)))
            .map(|buffer| (buffer.start, buffer.end()));
        tasks.chain(buffers)
    }
}
