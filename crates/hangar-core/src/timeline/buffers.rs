//! Buffer insertion and removal.

use jiff::SignedDuration;
use log::debug;

use super::Timeline;
use crate::models::{Anchor, Buffer, BufferChange};

impl Timeline {
    /// Grows the buffer at `anchor` by one increment, creating it if needed,
    /// and pushes every later task back by the increment.
    ///
    /// [`Anchor::Start`] is accepted only while the timeline is empty. Returns
    /// `None` if the anchor is a task that is not on the timeline, or if the
    /// grown buffer or a shifted task would end past the latest representable
    /// timestamp.
    pub fn add_buffer(&mut self, anchor: Anchor) -> Option<BufferChange> {
        let (anchor_index, anchor_end) = match anchor {
            Anchor::Start => {
                if !self.tasks.is_empty() {
                    debug!("Ignoring start buffer: timeline already has tasks");
                    return None;
                }
                (None, self.window.start)
            }
            Anchor::After(task_id) => {
                let Some(index) = self.position(task_id) else {
                    debug!("Ignoring buffer after unknown task {task_id}");
                    return None;
                };
                (Some(index), self.tasks[index].end)
            }
        };

        let increment = self.increment;
        let existing = self
            .buffers
            .iter()
            .position(|buffer| buffer.anchor == anchor);

        let current = existing.map_or(SignedDuration::ZERO, |index| self.buffers[index].duration);
        let fits = current
            .checked_add(increment)
            .is_some_and(|grown| anchor_end.checked_add(grown).is_ok())
            && anchor_index.map_or(true, |index| self.can_shift_after(index, increment));
        if !fits {
            debug!("Ignoring buffer at {anchor}: placements would leave the supported time range");
            return None;
        }

        let change = match existing {
            Some(buffer_index) => {
                let buffer = &mut self.buffers[buffer_index];
                buffer.duration += increment;
                BufferChange::Resized(buffer.clone())
            }
            None => {
                let buffer = Buffer {
                    id: self.next_buffer_id(),
                    anchor,
                    duration: increment,
                    start: anchor_end,
                };
                self.buffers.push(buffer.clone());
                BufferChange::Created(buffer)
            }
        };

        if let Some(index) = anchor_index {
            self.shift_after(index, increment);
        }
        debug!("Buffer at {anchor} is now {:?}", change.buffer().duration);
        Some(change)
    }

    /// Shrinks the buffer at `anchor` by one increment, deleting it when it
    /// reaches zero, and pulls every later task forward by the same amount.
    ///
    /// Returns `None` if no buffer exists at `anchor`.
    pub fn decrement_buffer(&mut self, anchor: Anchor) -> Option<BufferChange> {
        let Some(buffer_index) = self
            .buffers
            .iter()
            .position(|buffer| buffer.anchor == anchor)
        else {
            debug!("Ignoring decrement: no buffer at {anchor}");
            return None;
        };

        let removed = self.buffers[buffer_index].duration.min(self.increment);
        let remaining = self.buffers[buffer_index].duration - removed;
        let change = if remaining.is_positive() {
            self.buffers[buffer_index].duration = remaining;
            BufferChange::Resized(self.buffers[buffer_index].clone())
        } else {
            BufferChange::Removed(self.buffers.remove(buffer_index))
        };

        if let Anchor::After(task_id) = anchor {
            if let Some(index) = self.position(task_id) {
                self.shift_after(index, -removed);
            }
        }
        debug!("Buffer at {anchor} shrank by {removed:?}");
        Some(change)
    }
}
