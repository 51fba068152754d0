#![allow(dead_code)]

use hangar_core::{
    CatalogItem, Priority, Task, TaskCategory, Timeline, TimelineWindow,
    DEFAULT_BUFFER_INCREMENT,
};
use jiff::{SignedDuration, Timestamp};

/// Start of the window used across integration tests
pub fn window_start() -> Timestamp {
    "2024-02-28T08:19:00Z".parse().expect("valid timestamp")
}

/// Helper function to create an empty two-day timeline
pub fn create_test_timeline() -> Timeline {
    let window = TimelineWindow::new(
        window_start(),
        window_start() + SignedDuration::from_hours(48),
    )
    .expect("valid window");
    Timeline::new(window, DEFAULT_BUFFER_INCREMENT).expect("valid increment")
}

/// Catalog item with the given duration in quarter hours
pub fn quarter_hour_item(quarters: u32) -> CatalogItem {
    CatalogItem {
        id: format!("item-{quarters}"),
        title: format!("{quarters} quarter-hour job"),
        category: TaskCategory::Repair,
        estimated_hours: f64::from(quarters) / 4.0,
        description: String::new(),
        priority: Priority::Medium,
    }
}

/// Placements as (id, start, end) tuples in timeline order
pub fn placements(timeline: &Timeline) -> Vec<(u64, Timestamp, Timestamp)> {
    timeline
        .tasks()
        .iter()
        .map(|task: &Task| (task.id, task.start, task.end))
        .collect()
}
