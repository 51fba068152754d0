//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrappers for collections, operation results and the
//! pixel projection used by a planning surface. Everything is rendered as
//! markdown so the CLI can pass it through its terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (CatalogItems, FleetList)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time and duration formatting utilities
//! - [`layout`]: Pixel projection of a timeline (TimelineLayout)
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod layout;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CatalogItems, FleetList};
pub use datetime::{HoursMinutes, LocalDateTime};
pub use layout::{BlockKind, LayoutBlock, TimelineLayout};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
