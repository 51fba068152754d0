//! Core library for the Hangar maintenance plan builder.
//!
//! This crate lays out aircraft maintenance tasks on a timeline bounded by an
//! aircraft's availability and its next mission. Tasks are appended from a
//! catalog, reordered, removed, and separated by buffers of idle time; the
//! [`timeline`] engine keeps every placement contiguous and deterministic.
//!
//! # Layers
//!
//! - **Models** ([`models`]): tasks, buffers, catalog items, aircraft
//! - **Timeline** ([`timeline`]): the layout engine
//! - **Session** ([`session`]): one aircraft's plan, its builder and storage
//! - **Providers** ([`catalog`], [`fleet`]): read-only inputs to a session
//! - **Display** ([`display`]): markdown formatting and pixel projection
//!
//! # Quick Start
//!
//! ```rust
//! use hangar_core::{
//!     models::Anchor,
//!     params::{AddTask, EditBuffer},
//!     Catalog, Fleet, SessionBuilder,
//! };
//!
//! let fleet = Fleet::builtin();
//! let catalog = Catalog::builtin();
//!
//! let mut session = SessionBuilder::new()
//!     .with_aircraft(fleet.require("ac-101")?.clone())
//!     .build()?;
//!
//! let isolate = session.add_task(&catalog, &AddTask { catalog_id: "fi-hyd-pressure".into() })?;
//! session.add_task(&catalog, &AddTask { catalog_id: "rp-fuel-pump".into() })?;
//! session.extend_buffer(&EditBuffer { anchor: Anchor::After(isolate.id) });
//!
//! println!("{session}");
//! assert!(session.summary().fits_window);
//! # hangar_core::Result::<()>::Ok(())
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod fleet;
pub mod models;
pub mod params;
pub mod session;
pub mod timeline;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{CatalogItems, CreateResult, DeleteResult, FleetList, OperationStatus, TimelineLayout};
pub use error::{HangarError, Result};
pub use fleet::Fleet;
pub use models::{
    Aircraft, Anchor, Buffer, BufferChange, CatalogItem, PlanSummary, Priority, Task,
    TaskCategory, TimelineWindow,
};
pub use params::{AddTask, EditBuffer, ListCatalog, MoveTask, RemoveTask, ShowLayout, StartSession};
pub use session::{PlanningSession, SessionBuilder, SessionStore};
pub use timeline::{Timeline, DEFAULT_BUFFER_INCREMENT, MAX_BUFFER_INCREMENT};
