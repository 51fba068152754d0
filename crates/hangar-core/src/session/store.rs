//! JSON storage of a planning session between CLI invocations.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

use super::PlanningSession;
use crate::error::{HangarError, Result};

/// Location of the saved planning session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at `path`, or at the default location if `None`.
    ///
    /// The default follows the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/hangar/session.json` or
    /// `~/.local/share/hangar/session.json`
    ///
    /// # Errors
    ///
    /// Returns `HangarError::XdgDirectory` if the default location cannot be
    /// determined.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(path) => path.as_ref().to_path_buf(),
            None => Self::default_session_path()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved session, or `None` if none has been saved.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::FileSystem` if the file exists but cannot be
    /// read, and `HangarError::Serialization` if it is not a valid session.
    pub fn load(&self) -> Result<Option<PlanningSession>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HangarError::file_system(&self.path, e)),
        };
        let session = serde_json::from_str(&text)?;
        debug!("Loaded planning session from {}", self.path.display());
        Ok(Some(session))
    }

    /// Reads the saved session, failing if none has been saved.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::NoActiveSession` if nothing is saved, plus the
    /// errors of [`SessionStore::load`].
    pub fn require(&self) -> Result<PlanningSession> {
        self.load()?.ok_or_else(|| HangarError::NoActiveSession {
            path: self.path.clone(),
        })
    }

    /// Writes the session, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::FileSystem` if the file cannot be written.
    pub fn save(&self, session: &PlanningSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| HangarError::file_system(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).map_err(|e| HangarError::file_system(&self.path, e))?;
        debug!("Saved planning session to {}", self.path.display());
        Ok(())
    }

    /// Deletes the saved session. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::FileSystem` if the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(HangarError::file_system(&self.path, e)),
        }
    }

    /// Returns the default session path following XDG Base Directory
    /// specification.
    fn default_session_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("hangar")
            .place_data_file("session.json")
            .map_err(|e| HangarError::XdgDirectory(e.to_string()))
    }
}
