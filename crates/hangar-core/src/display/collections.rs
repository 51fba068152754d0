//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use crate::models::{Aircraft, CatalogItem};

/// Newtype wrapper for displaying catalog listings.
///
/// # Examples
///
/// ```rust
/// use hangar_core::{display::CatalogItems, Catalog};
///
/// let output = CatalogItems(Catalog::builtin().items().to_vec()).to_string();
/// assert!(output.contains("rp-fuel-pump"));
/// assert!(CatalogItems(vec![]).to_string().contains("No catalog items found."));
/// ```
pub struct CatalogItems(pub Vec<CatalogItem>);

impl CatalogItems {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for CatalogItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No catalog items found.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the selectable aircraft.
pub struct FleetList(pub Vec<Aircraft>);

impl FleetList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FleetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No aircraft found.");
        }
        for aircraft in &self.0 {
            write!(f, "{aircraft}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fleet;

    #[test]
    fn test_fleet_list_display() {
        let output = FleetList(Fleet::builtin().aircraft().to_vec()).to_string();
        assert!(output.contains("### ac-101 (N101HG, C-130J)"));
        assert!(output.contains("Next mission:"));
    }

    #[test]
    fn test_empty_fleet_list() {
        let list = FleetList(vec![]);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "No aircraft found.\n");
    }
}
