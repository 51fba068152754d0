//! Timeline layout engine.
//!
//! A [`Timeline`] owns the ordered tasks of one maintenance plan and the
//! buffers inserted between them, and keeps their absolute placement
//! consistent as tasks are appended, moved and removed and as buffers are
//! resized.
//!
//! # Placement model
//!
//! ```text
//! window.start
//! │
//! ├── task A ──┤ buffer(A) ├── task B ──┤── task C ──┤ ...
//! ```
//!
//! After every append, reorder and buffer edit:
//!
//! 1. Tasks are sorted by start and `next.start = prev.end + buffer(prev)`.
//! 2. The first task starts at `window.start`.
//! 3. At most one buffer exists per [`Anchor`].
//!
//! [`Timeline::recompute`] re-derives every placement from list order,
//! durations and buffers alone, so two timelines with the same order and
//! buffers always lay out identically. Removing a task leaves the remaining
//! placements untouched until the next recompute.
//!
//! Unknown task IDs, out-of-range indices and edits of missing buffers are
//! no-ops; operations report them through `Option` or `bool` rather than
//! errors.
//!
//! # Examples
//!
//! ```rust
//! use hangar_core::{
//!     models::{Anchor, CatalogItem, Priority, TaskCategory, TimelineWindow},
//!     timeline::{Timeline, DEFAULT_BUFFER_INCREMENT},
//! };
//!
//! let window = TimelineWindow::new(
//!     "2024-02-28T08:19:00Z".parse()?,
//!     "2024-02-29T16:00:00Z".parse()?,
//! )?;
//! let mut timeline = Timeline::new(window, DEFAULT_BUFFER_INCREMENT)?;
//!
//! let item = CatalogItem {
//!     id: "rp-gear".to_string(),
//!     title: "Replace gear actuator".to_string(),
//!     category: TaskCategory::Repair,
//!     estimated_hours: 2.0,
//!     description: String::new(),
//!     priority: Priority::Medium,
//! };
//! let first = timeline.append(&item)?;
//! let second = timeline.append(&item)?;
//! assert_ne!(first.id, second.id);
//! assert_eq!(second.start, first.end);
//!
//! timeline.add_buffer(Anchor::After(first.id));
//! assert_eq!(timeline.task(second.id).unwrap().start.to_string(), "2024-02-28T10:49:00Z");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use jiff::{SignedDuration, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{HangarError, Result},
    models::{Anchor, Buffer, Task, TimelineWindow},
};

mod buffers;
mod placement;
mod validate;


/// Default buffer increment (30 minutes).
pub const DEFAULT_BUFFER_INCREMENT: SignedDuration = SignedDuration::from_mins(30);

/// Largest accepted buffer increment (one day).
pub const MAX_BUFFER_INCREMENT: SignedDuration = SignedDuration::from_hours(24);

/// Ordered task placements plus buffers for one planning window.
///
/// Deserialized timelines are checked with [`Timeline::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "validate::TimelineDe")]
pub struct Timeline {
    window: TimelineWindow,
    increment: SignedDuration,
    tasks: Vec<Task>,
    buffers: Vec<Buffer>,
    next_task_id: u64,
    next_buffer_id: u64,
}

impl Timeline {
    /// Creates an empty timeline.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if `increment` is not positive or
    /// exceeds [`MAX_BUFFER_INCREMENT`].
    pub fn new(window: TimelineWindow, increment: SignedDuration) -> Result<Self> {
        check_increment(increment)?;

        Ok(Self {
            window,
            increment,
            tasks: Vec::new(),
            buffers: Vec::new(),
            next_task_id: 1,
            next_buffer_id: 1,
        })
    }

    pub fn window(&self) -> &TimelineWindow {
        &self.window
    }

    /// Step by which buffers grow and shrink.
    pub fn increment(&self) -> SignedDuration {
        self.increment
    }

    /// Tasks in timeline order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Position of a task in timeline order.
    pub fn position(&self, task_id: u64) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }

    /// The buffer attached to `anchor`, if any.
    pub fn buffer_at(&self, anchor: Anchor) -> Option<&Buffer> {
        self.buffers.iter().find(|buffer| buffer.anchor == anchor)
    }

    /// Idle time following a task (zero without a buffer).
    pub fn gap_after(&self, task_id: u64) -> SignedDuration {
        self.buffer_at(Anchor::After(task_id))
            .map_or(SignedDuration::ZERO, |buffer| buffer.duration)
    }

    /// End of the last task, if any.
    pub fn completes_at(&self) -> Option<Timestamp> {
        self.tasks.last().map(|task| task.end)
    }

    /// Re-derives every placement from list order, durations and buffers.
    ///
    /// Walks the tasks from `window.start`, placing each at the cursor and
    /// advancing the cursor past the task and its buffer.
    pub fn recompute(&mut self) {
        let mut cursor = self.window.start;
        for task in &mut self.tasks {
            task.place_at(cursor);
            cursor = task.end;
            if let Some(buffer) = self
                .buffers
                .iter_mut()
                .find(|buffer| buffer.anchor == Anchor::After(task.id))
            {
                buffer.start = task.end;
                cursor += buffer.duration;
            }
        }
        if let Some(buffer) = self
            .buffers
            .iter_mut()
            .find(|buffer| buffer.anchor == Anchor::Start)
        {
            buffer.start = self.window.start;
        }
        debug!(
            "Recomputed {} task placements from {}",
            self.tasks.len(),
            self.window.start
        );
    }

    /// Whether current placements match what [`Timeline::recompute`] would
    /// produce.
    ///
    /// False only after [`Timeline::delete_task`] leaves a hole.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = self.window.start;
        for task in &self.tasks {
            if task.start != cursor || task.end != task.start + task.duration {
                return false;
            }
            cursor = task.end + self.gap_after(task.id);
        }
        true
    }

    fn next_task_id(&mut self) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }

    fn next_buffer_id(&mut self) -> u64 {
        let id = self.next_buffer_id;
        self.next_buffer_id += 1;
        id
    }

    /// Whether every task after `index`, and its buffer, can move by `offset`
    /// without leaving the representable time range.
    fn can_shift_after(&self, index: usize, offset: SignedDuration) -> bool {
        let tasks_fit = self.tasks.iter().skip(index + 1).all(|task| {
            task.start.checked_add(offset).is_ok() && task.end.checked_add(offset).is_ok()
        });
        tasks_fit
            && self.tasks.iter().skip(index + 1).all(|task| {
                self.buffer_at(Anchor::After(task.id)).map_or(true, |buffer| {
                    buffer
                        .start
                        .checked_add(buffer.duration)
                        .and_then(|end| end.checked_add(offset))
                        .is_ok()
                })
            })
    }

    /// Moves every task after `index` by `offset`.
    fn shift_after(&mut self, index: usize, offset: SignedDuration) {
        for task in self.tasks.iter_mut().skip(index + 1) {
            task.shift(offset);
        }
        for buffer in &mut self.buffers {
            if let Anchor::After(anchor_id) = buffer.anchor {
                if self
                    .tasks
                    .iter()
                    .position(|task| task.id == anchor_id)
                    .is_some_and(|position| position > index)
                {
                    buffer.start += offset;
                }
            }
        }
    }
}

fn check_increment(increment: SignedDuration) -> Result<()> {
    if !increment.is_positive() || increment > MAX_BUFFER_INCREMENT {
        return Err(HangarError::invalid_input("buffer_increment").with_reason(format!(
            "Buffer increment must be positive and at most {MAX_BUFFER_INCREMENT:?}, got {increment:?}"
        )));
    }
    Ok(())
}
