//! Category and priority enumerations for maintenance work.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of maintenance task categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    /// Troubleshooting to locate the source of a reported fault
    FaultIsolation,

    /// Corrective work on a known fault
    Repair,

    /// Installation of a modification kit
    ModKit,
}

impl FromStr for TaskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fault-isolation" | "fault_isolation" | "faultisolation" => {
                Ok(TaskCategory::FaultIsolation)
            }
            "repair" => Ok(TaskCategory::Repair),
            "mod-kit" | "mod_kit" | "modkit" => Ok(TaskCategory::ModKit),
            _ => Err(format!("Invalid task category: {s}")),
        }
    }
}

impl TaskCategory {
    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::FaultIsolation => "fault-isolation",
            TaskCategory::Repair => "repair",
            TaskCategory::ModKit => "mod-kit",
        }
    }

    /// Human-readable label for listings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hangar_core::models::TaskCategory;
    ///
    /// assert_eq!(TaskCategory::FaultIsolation.label(), "Fault Isolation");
    /// assert_eq!(TaskCategory::ModKit.label(), "Mod Kit");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::FaultIsolation => "Fault Isolation",
            TaskCategory::Repair => "Repair",
            TaskCategory::ModKit => "Mod Kit",
        }
    }
}

/// Informational priority carried from the catalog onto placed tasks.
///
/// Priority never influences placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}
