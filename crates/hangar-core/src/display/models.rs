//! Display implementations for domain models.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Timestamps in the system timezone, durations as hours and minutes
//! - A plan listing that interleaves buffers with the tasks they follow

use std::fmt;

use super::datetime::{HoursMinutes, LocalDateTime};
use crate::{
    models::{Aircraft, Anchor, Buffer, CatalogItem, PlanSummary, Priority, Task, TaskCategory},
    session::PlanningSession,
};

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.category.label()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} → {} ({})",
            LocalDateTime(&self.start),
            LocalDateTime(&self.end),
            HoursMinutes(self.duration)
        )?;
        writeln!(f, "- Catalog: {}", self.catalog_id)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = match self.anchor {
            Anchor::Start => "before first task".to_string(),
            Anchor::After(task_id) => format!("after task {task_id}"),
        };
        writeln!(
            f,
            "> Buffer {} {position}: {} ({} → {})",
            self.id,
            HoursMinutes(self.duration),
            LocalDateTime(&self.start),
            LocalDateTime(&self.end())
        )?;
        writeln!(f)
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({}, {})", self.id, self.tail_number, self.model)?;
        writeln!(f)?;
        writeln!(f, "- Available: {}", LocalDateTime(&self.available_at))?;
        writeln!(f, "- Next mission: {}", LocalDateTime(&self.next_mission_at))?;
        writeln!(f)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} ({}, {}h, {})",
            self.id,
            self.title,
            self.category.label(),
            self.estimated_hours,
            self.priority
        )
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Tasks: {} ({} work)",
            self.task_count,
            HoursMinutes(self.work)
        )?;
        writeln!(
            f,
            "- Buffers: {} ({} idle)",
            self.buffer_count,
            HoursMinutes(self.idle)
        )?;
        if let Some(completes_at) = &self.completes_at {
            writeln!(f, "- Completes: {}", LocalDateTime(completes_at))?;
        }
        if self.fits_window {
            writeln!(f, "- Slack before next mission: {}", HoursMinutes(self.slack))?;
        } else {
            writeln!(
                f,
                "- Overruns next mission by {}",
                HoursMinutes(-self.slack)
            )?;
        }
        if self.needs_reflow {
            writeln!(f, "- Placement has gaps; run `hangar reflow` to close them")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanningSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let aircraft = self.aircraft();
        let timeline = self.timeline();

        writeln!(
            f,
            "# Maintenance plan: {} ({})",
            aircraft.tail_number, aircraft.model
        )?;
        writeln!(f)?;
        writeln!(f, "- Aircraft: {}", aircraft.id)?;
        writeln!(f, "- Available: {}", LocalDateTime(&aircraft.available_at))?;
        writeln!(
            f,
            "- Next mission: {}",
            LocalDateTime(&aircraft.next_mission_at)
        )?;
        writeln!(f, "- Buffer increment: {}", HoursMinutes(timeline.increment()))?;

        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        if let Some(buffer) = timeline.buffer_at(Anchor::Start) {
            write!(f, "{buffer}")?;
        }
        if timeline.is_empty() {
            writeln!(f, "No tasks in this plan.")?;
        }
        for task in timeline.tasks() {
            write!(f, "{task}")?;
            if let Some(buffer) = timeline.buffer_at(Anchor::After(task.id)) {
                write!(f, "{buffer}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.summary())
    }
}
