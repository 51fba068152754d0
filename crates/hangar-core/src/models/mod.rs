//! Data models for maintenance planning.
//!
//! This module contains the domain models of a maintenance plan: catalog
//! templates, the tasks placed from them, the buffers inserted between
//! tasks, and the aircraft whose availability bounds the plan. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use hangar_core::models::{CatalogItem, Priority, TaskCategory};
//! use jiff::SignedDuration;
//!
//! let item = CatalogItem {
//!     id: "fi-hyd-leak".to_string(),
//!     title: "Hydraulic leak isolation".to_string(),
//!     category: TaskCategory::FaultIsolation,
//!     estimated_hours: 1.5,
//!     description: String::new(),
//!     priority: Priority::High,
//! };
//! assert_eq!(item.duration()?, SignedDuration::from_mins(90));
//! # hangar_core::Result::<()>::Ok(())
//! ```

pub mod aircraft;
pub mod buffer;
pub mod catalog_item;
pub mod category;
pub mod summary;
pub mod task;


// Re-export all public types at the models level
pub use aircraft::{Aircraft, TimelineWindow};
pub use buffer::{Anchor, Buffer, BufferChange};
pub use catalog_item::{CatalogItem, MAX_ESTIMATED_HOURS};
pub use category::{Priority, TaskCategory};
pub use summary::PlanSummary;
pub use task::Task;
