//! Session Persistence
//!
//! The logged-in session (user profile + bearer token) is stored as a
//! single JSON file so it survives restarts. A file that fails to
//! parse is removed and treated as logged out.

use std::fs;
use std::path::PathBuf;

use crate::error::ClientResult;
use crate::models::StoredSession;

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist the session
    pub fn save(&self, session: &StoredSession) -> ClientResult<()> {
        let json = serde_json::to_string(session)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the persisted session, if any
    ///
    /// A missing file means logged out. A corrupt file is deleted and
    /// also treated as logged out.
    pub fn restore(&self) -> Option<StoredSession> {
        let raw = fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session file");
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    /// Remove the persisted session (logout)
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
