//! Aircraft selection.
//!
//! Supplies the aircraft a plan can be built for and, through
//! [`Aircraft::window`], the fixed window of a planning session.

use std::{fs, path::Path};

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{HangarError, Result, ResultExt},
    models::Aircraft,
};

/// Read-only list of selectable aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
}

impl Fleet {
    /// Creates a fleet, validating every aircraft's window.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::InvalidInput` if an aircraft's next mission
    /// precedes its availability or an ID is repeated.
    pub fn new(aircraft: Vec<Aircraft>) -> Result<Self> {
        for (index, entry) in aircraft.iter().enumerate() {
            entry.window()?;
            if aircraft[..index].iter().any(|other| other.id == entry.id) {
                return Err(HangarError::invalid_input("id")
                    .with_reason(format!("Duplicate aircraft ID '{}'", entry.id)));
            }
        }
        Ok(Self { aircraft })
    }

    /// Loads a fleet from a JSON file containing an array of aircraft.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::FileSystem` if the file cannot be read,
    /// `HangarError::Configuration` if it is not valid fleet JSON, and
    /// validation errors from [`Fleet::new`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|e| HangarError::file_system(path, e))?;
        let aircraft: Vec<Aircraft> = serde_json::from_str(&text)
            .with_context_lazy(|| format!("Failed to parse fleet file {}", path.display()))?;
        debug!("Loaded {} aircraft from {}", aircraft.len(), path.display());
        Self::new(aircraft)
    }

    /// The built-in fleet.
    pub fn builtin() -> Self {
        Self {
            aircraft: vec![
                aircraft(
                    "ac-101",
                    "N101HG",
                    "C-130J",
                    Timestamp::constant(1_709_108_340, 0),
                    Timestamp::constant(1_709_208_000, 0),
                ),
                aircraft(
                    "ac-204",
                    "N204HG",
                    "KC-46A",
                    Timestamp::constant(1_709_132_400, 0),
                    Timestamp::constant(1_709_157_600, 0),
                ),
                aircraft(
                    "ac-317",
                    "N317HG",
                    "P-8A",
                    Timestamp::constant(1_709_186_400, 0),
                    Timestamp::constant(1_709_316_000, 0),
                ),
            ],
        }
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn get(&self, id: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|entry| entry.id == id)
    }

    /// Looks up an aircraft, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::AircraftNotFound` if no aircraft has this ID.
    pub fn require(&self, id: &str) -> Result<&Aircraft> {
        self.get(id)
            .ok_or_else(|| HangarError::AircraftNotFound { id: id.to_string() })
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn aircraft(
    id: &str,
    tail_number: &str,
    model: &str,
    available_at: Timestamp,
    next_mission_at: Timestamp,
) -> Aircraft {
    Aircraft {
        id: id.to_string(),
        tail_number: tail_number.to_string(),
        model: model.to_string(),
        available_at,
        next_mission_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fleet_is_valid() {
        let fleet = Fleet::builtin();
        assert_eq!(Fleet::new(fleet.aircraft().to_vec()).unwrap(), fleet);
    }

    #[test]
    fn test_first_aircraft_available_at_scenario_start() {
        let fleet = Fleet::builtin();
        let entry = fleet.require("ac-101").expect("aircraft present");
        assert_eq!(entry.available_at.to_string(), "2024-02-28T08:19:00Z");
        assert_eq!(entry.next_mission_at.to_string(), "2024-02-29T12:00:00Z");
    }

    #[test]
    fn test_require_unknown_aircraft() {
        assert!(matches!(
            Fleet::builtin().require("ac-999"),
            Err(HangarError::AircraftNotFound { .. })
        ));
    }

    #[test]
    fn test_new_rejects_inverted_window() {
        let mut entries = Fleet::builtin().aircraft().to_vec();
        entries[0].next_mission_at = Timestamp::constant(0, 0);
        assert!(Fleet::new(entries).is_err());
    }
}
