//! Catalog of maintenance task templates.
//!
//! The catalog is read-only input to a planning session: tasks are copied
//! out of it, never written back. A built-in set of templates covers every
//! [`TaskCategory`]; a JSON file with an array of [`CatalogItem`] objects can
//! replace it.

use std::{collections::HashSet, fs, path::Path};

use log::debug;

use crate::{
    error::{HangarError, Result, ResultExt},
    models::{CatalogItem, Priority, TaskCategory},
};

/// Validated, read-only list of catalog items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Creates a catalog from items, validating IDs and estimates.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` for an empty or duplicate ID, or an
    /// estimate that is not a positive number of hours.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(HangarError::invalid_input("id")
                    .with_reason("Catalog item IDs must not be empty"));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(HangarError::invalid_input("id")
                    .with_reason(format!("Duplicate catalog item ID '{}'", item.id)));
            }
            item.duration()?;
        }
        Ok(Self { items })
    }

    /// Loads a catalog from a JSON file containing an array of items.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::FileSystem` if the file cannot be read,
    /// `HangarError::Configuration` if it is not valid catalog JSON, and
    /// validation errors from [`Catalog::new`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|e| HangarError::file_system(path, e))?;
        let items: Vec<CatalogItem> = serde_json::from_str(&text)
            .with_context_lazy(|| format!("Failed to parse catalog file {}", path.display()))?;
        debug!("Loaded {} catalog items from {}", items.len(), path.display());
        Self::new(items)
    }

    /// The built-in template set.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::CatalogItemNotFound` if no item has this ID.
    pub fn require(&self, id: &str) -> Result<&CatalogItem> {
        self.get(id)
            .ok_or_else(|| HangarError::CatalogItemNotFound { id: id.to_string() })
    }

    /// Items of one category, in catalog order.
    pub fn by_category(&self, category: TaskCategory) -> Vec<CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(
    id: &str,
    title: &str,
    category: TaskCategory,
    estimated_hours: f64,
    priority: Priority,
    description: &str,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        category,
        estimated_hours,
        description: description.to_string(),
        priority,
    }
}

fn builtin_items() -> Vec<CatalogItem> {
    use Priority::*;
    use TaskCategory::*;

    vec![
        entry(
            "fi-hyd-pressure",
            "Hydraulic pressure fault isolation",
            FaultIsolation,
            2.0,
            High,
            "Trace low system B pressure using the hydraulic test stand.",
        ),
        entry(
            "fi-avionics-bit",
            "Avionics BIT failure isolation",
            FaultIsolation,
            1.5,
            Medium,
            "Run extended built-in test and isolate the failing LRU.",
        ),
        entry(
            "fi-engine-vib",
            "Engine vibration troubleshooting",
            FaultIsolation,
            3.0,
            High,
            "Borescope and trim balance check on the reported engine.",
        ),
        entry(
            "rp-mlg-actuator",
            "Replace main landing gear actuator",
            Repair,
            4.0,
            Critical,
            "Remove and replace the actuator, then perform gear swing.",
        ),
        entry(
            "rp-fuel-pump",
            "Replace fuel boost pump",
            Repair,
            1.0,
            High,
            "Swap the boost pump and leak check the tank.",
        ),
        entry(
            "rp-radome-seal",
            "Repair radome seal",
            Repair,
            0.5,
            Low,
            "Clean, reseal and cure the radome edge seal.",
        ),
        entry(
            "mk-adsb-out",
            "Install ADS-B Out mod kit",
            ModKit,
            6.0,
            Medium,
            "Install transponder upgrade and perform functional test.",
        ),
        entry(
            "mk-radar-sw",
            "Radar software mod kit",
            ModKit,
            2.5,
            Low,
            "Load the new radar operational flight program and verify.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.items().to_vec()).expect("builtin is valid");
        assert_eq!(validated, builtin);
        for category in [
            TaskCategory::FaultIsolation,
            TaskCategory::Repair,
            TaskCategory::ModKit,
        ] {
            assert!(!builtin.by_category(category).is_empty());
        }
    }

    #[test]
    fn test_require_unknown_item() {
        let catalog = Catalog::builtin();
        assert!(catalog.require("rp-fuel-pump").is_ok());
        match catalog.require("nope") {
            Err(HangarError::CatalogItemNotFound { id }) => assert_eq!(id, "nope"),
            other => panic!("Expected CatalogItemNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut items = Catalog::builtin().items().to_vec();
        items.push(items[0].clone());
        assert!(matches!(
            Catalog::new(items),
            Err(HangarError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": "x1", "title": "Wheel change", "category": "repair", "estimated_hours": 0.75}}]"#
        )
        .expect("write catalog");

        let catalog = Catalog::from_path(file.path()).expect("load catalog");
        let item = catalog.require("x1").expect("item present");
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.category, TaskCategory::Repair);
    }

    #[test]
    fn test_from_path_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");
        assert!(matches!(
            Catalog::from_path(file.path()),
            Err(HangarError::Configuration { .. })
        ));
    }
}
