//! Projection of a timeline onto a vertical pixel axis.
//!
//! A planning surface draws each task and buffer as a block whose offset is
//! `(start - window.start) × pixels_per_hour` and whose height is
//! `duration × pixels_per_hour`.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use super::datetime::HoursMinutes;
use crate::{
    error::{HangarError, Result},
    models::Anchor,
    timeline::Timeline,
};

/// What a layout block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum BlockKind {
    Task(u64),
    Buffer(u64),
}

/// One positioned block on the planning surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutBlock {
    pub kind: BlockKind,
    pub label: String,
    pub duration: SignedDuration,
    /// Distance from the top of the surface, in pixels
    pub offset: f64,
    /// Block height, in pixels
    pub height: f64,
}

/// Every block of a timeline at a given scale, sorted by offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub pixels_per_hour: f64,
    /// Height of the whole window, in pixels
    pub window_height: f64,
    pub blocks: Vec<LayoutBlock>,
}

fn hours(duration: SignedDuration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

impl TimelineLayout {
    /// Projects `timeline` at `pixels_per_hour`.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if `pixels_per_hour` is not a
    /// positive finite number.
    pub fn project(timeline: &Timeline, pixels_per_hour: f64) -> Result<Self> {
        if !pixels_per_hour.is_finite() || pixels_per_hour <= 0.0 {
            return Err(HangarError::invalid_input("pixels_per_hour").with_reason(format!(
                "Scale must be a positive number, got {pixels_per_hour}"
            )));
        }

        let origin = timeline.window().start;
        let block = |kind: BlockKind, label: String, start: Timestamp, duration: SignedDuration| {
            LayoutBlock {
                kind,
                label,
                duration,
                offset: hours(start.duration_since(origin)) * pixels_per_hour,
                height: hours(duration) * pixels_per_hour,
            }
        };

        let tasks = timeline
            .tasks()
            .iter()
            .map(|task| block(BlockKind::Task(task.id), task.title.clone(), task.start, task.duration));
        let buffers = timeline.buffers().iter().map(|buffer| {
            let label = match buffer.anchor {
                Anchor::Start => "Buffer before first task".to_string(),
                Anchor::After(task_id) => format!("Buffer after task {task_id}"),
            };
            block(BlockKind::Buffer(buffer.id), label, buffer.start, buffer.duration)
        });

        let mut blocks: Vec<LayoutBlock> = tasks.chain(buffers).collect();
        blocks.sort_by(|a, b| a.offset.total_cmp(&b.offset));

        Ok(Self {
            pixels_per_hour,
            window_height: hours(timeline.window().length()) * pixels_per_hour,
            blocks,
        })
    }
}

impl fmt::Display for TimelineLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scale: {} px/h, window height: {:.1} px",
            self.pixels_per_hour, self.window_height
        )?;
        writeln!(f)?;

        if self.blocks.is_empty() {
            writeln!(f, "No blocks to lay out.")?;
            return Ok(());
        }

        for block in &self.blocks {
            let tag = match block.kind {
                BlockKind::Task(id) => format!("task {id}"),
                BlockKind::Buffer(id) => format!("buffer {id}"),
            };
            writeln!(
                f,
                "- [{tag}] {}: offset {:.1} px, height {:.1} px ({})",
                block.label,
                block.offset,
                block.height,
                HoursMinutes(block.duration)
            )?;
        }
        Ok(())
    }
}
