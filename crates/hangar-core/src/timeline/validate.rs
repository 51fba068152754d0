//! Consistency checks for timelines read from storage.

use std::collections::HashSet;

use jiff::SignedDuration;
use serde::Deserialize;

use super::{check_increment, Timeline};
use crate::{
    error::{HangarError, Result},
    models::{Anchor, Buffer, Task, TimelineWindow},
};

/// Serialized shape of a [`Timeline`], validated before use.
#[derive(Debug, Deserialize)]
pub(super) struct TimelineDe {
    window: TimelineWindow,
    increment: SignedDuration,
    tasks: Vec<Task>,
    buffers: Vec<Buffer>,
    next_task_id: u64,
    next_buffer_id: u64,
}

impl TryFrom<TimelineDe> for Timeline {
    type Error = HangarError;

    fn try_from(raw: TimelineDe) -> Result<Self> {
        let timeline = Timeline {
            window: raw.window,
            increment: raw.increment,
            tasks: raw.tasks,
            buffers: raw.buffers,
            next_task_id: raw.next_task_id,
            next_buffer_id: raw.next_buffer_id,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

fn invalid(field: &str, reason: String) -> HangarError {
    HangarError::invalid_input(field).with_reason(reason)
}

impl Timeline {
    /// Checks that the timeline is one the layout engine could have built.
    ///
    /// Tasks must have positive durations, consistent ends and unique IDs
    /// below the ID counter, and appear in start order with every buffer
    /// fitting before the next task. Buffers must be positive, one per
    /// anchor, and follow a task on the timeline; a start buffer may only
    /// exist while there are no tasks.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` naming the first violated rule.
    pub fn validate(&self) -> Result<()> {
        TimelineWindow::new(self.window.start, self.window.end)?;
        check_increment(self.increment)?;

        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if task.id >= self.next_task_id || !task_ids.insert(task.id) {
                return Err(invalid(
                    "tasks",
                    format!("Task ID {} is repeated or beyond the ID counter", task.id),
                ));
            }
            if !task.duration.is_positive() || task.start.checked_add(task.duration).ok() != Some(task.end) {
                return Err(invalid(
                    "tasks",
                    format!("Task {} has an inconsistent duration", task.id),
                ));
            }
            if task.start < self.window.start {
                return Err(invalid(
                    "tasks",
                    format!("Task {} starts before the window", task.id),
                ));
            }
        }

        let mut buffer_ids = HashSet::new();
        let mut anchors = HashSet::new();
        for buffer in &self.buffers {
            if buffer.id >= self.next_buffer_id || !buffer_ids.insert(buffer.id) {
                return Err(invalid(
                    "buffers",
                    format!("Buffer ID {} is repeated or beyond the ID counter", buffer.id),
                ));
            }
            if !anchors.insert(buffer.anchor) {
                return Err(invalid(
                    "buffers",
                    format!("More than one buffer at {}", buffer.anchor),
                ));
            }
            if !buffer.duration.is_positive() || buffer.start.checked_add(buffer.duration).is_err() {
                return Err(invalid(
                    "buffers",
                    format!("Buffer {} has an invalid duration", buffer.id),
                ));
            }
            let expected_start = match buffer.anchor {
                Anchor::Start if self.tasks.is_empty() => Some(self.window.start),
                Anchor::Start => None,
                Anchor::After(task_id) => self.task(task_id).map(|task| task.end),
            };
            if expected_start != Some(buffer.start) {
                return Err(invalid(
                    "buffers",
                    format!("Buffer {} is not attached at {}", buffer.id, buffer.anchor),
                ));
            }
        }

        for pair in self.tasks.windows(2) {
            let free_from = pair[0].end.checked_add(self.gap_after(pair[0].id)).ok();
            if free_from.map_or(true, |free_from| pair[1].start < free_from) {
                return Err(invalid(
                    "tasks",
                    format!("Task {} overlaps the task or buffer before it", pair[1].id),
                ));
            }
        }
        Ok(())
    }
}
