//! Saved session history.
//!
//! The whole history is one JSON array stored under a single key, most
//! recent first. Every change is a full read-modify-write of that array.

use super::session::Session;
use crate::error::RunDistError;
use crate::storage::SessionStore;

/// Session history over a key-value store.
pub struct History<S> {
    store: S,
    key: String,
}

impl<S: SessionStore> History<S> {
    /// Create a history stored under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// All saved sessions, most recent first.
    ///
    /// Missing or unreadable content is treated as an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails.
    pub fn list(&self) -> Result<Vec<Session>, RunDistError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                log::warn!("Ignoring unreadable history under '{}': {e}", self.key);
                Ok(Vec::new())
            }
        }
    }

    /// Number of saved sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn len(&self) -> Result<usize, RunDistError> {
        Ok(self.list()?.len())
    }

    /// Whether there are no saved sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn is_empty(&self) -> Result<bool, RunDistError> {
        Ok(self.len()? == 0)
    }

    /// Session at `index`, 0 being the most recent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no entry at `index`.
    pub fn get(&self, index: usize) -> Result<Session, RunDistError> {
        let mut sessions = self.list()?;
        if index >= sessions.len() {
            return Err(not_found(index, sessions.len()));
        }
        Ok(sessions.swap_remove(index))
    }

    /// Prepend a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be written.
    pub fn save(&mut self, session: Session) -> Result<(), RunDistError> {
        let mut sessions = self.list()?;
        sessions.insert(0, session);
        self.write(&sessions)?;
        log::debug!("Saved session; history now has {} entries", sessions.len());
        Ok(())
    }

    /// Remove and return the session at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no entry at `index`, or an error if the
    /// history cannot be written.
    pub fn delete(&mut self, index: usize) -> Result<Session, RunDistError> {
        let mut sessions = self.list()?;
        if index >= sessions.len() {
            return Err(not_found(index, sessions.len()));
        }

        let removed = sessions.remove(index);
        self.write(&sessions)?;
        Ok(removed)
    }

    /// Delete every saved session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn clear(&mut self) -> Result<(), RunDistError> {
        self.store.remove(&self.key)
    }

    fn write(&mut self, sessions: &[Session]) -> Result<(), RunDistError> {
        let raw = serde_json::to_string(sessions)?;
        self.store.set(&self.key, &raw)
    }
}

fn not_found(index: usize, len: usize) -> RunDistError {
    RunDistError::NotFound(format!(
        "History entry {} (history has {len} entries)",
        index + 1
    ))
}
