//! Catalog item definition: a template for maintenance work.

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskCategory};
use crate::error::{HangarError, Result};

/// Longest estimate accepted for a single catalog item (30 days).
pub const MAX_ESTIMATED_HOURS: f64 = 720.0;

/// A read-only template from which timeline tasks are instantiated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Catalog identifier (shared by every task created from this item)
    pub id: String,

    /// Short title of the work
    pub title: String,

    /// Kind of maintenance work
    pub category: TaskCategory,

    /// Estimated duration in hours
    pub estimated_hours: f64,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Informational priority
    #[serde(default)]
    pub priority: Priority,
}

impl CatalogItem {
    /// Converts the hour estimate into a duration rounded to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if the estimate is not a finite
    /// number in `(0, MAX_ESTIMATED_HOURS]`.
    pub fn duration(&self) -> Result<SignedDuration> {
        let hours = self.estimated_hours;
        if !hours.is_finite() || hours <= 0.0 || hours > MAX_ESTIMATED_HOURS {
            return Err(HangarError::invalid_input("estimated_hours").with_reason(format!(
                "Catalog item '{}' has estimate {hours}; expected a positive number of hours up to {MAX_ESTIMATED_HOURS}",
                self.id
            )));
        }

        let seconds = (hours * 3600.0).round() as i64;
        if seconds == 0 {
            return Err(HangarError::invalid_input("estimated_hours").with_reason(format!(
                "Catalog item '{}' is shorter than one second",
                self.id
            )));
        }

        Ok(SignedDuration::from_secs(seconds))
    }
}
