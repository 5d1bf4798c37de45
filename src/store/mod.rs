//! Session persistence
//!
//! A key-value contract for saving a player's [`GameSession`] between runs.
//! Last write wins; there are no transactions.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::game::GameSession;
use std::fmt;
use std::io;

/// Error type for session persistence
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
    /// Session ids become file names, so they are restricted
    InvalidId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Session storage I/O error: {err}"),
            Self::Serde(err) => write!(f, "Session data is corrupt: {err}"),
            Self::InvalidId(id) => write!(
                f,
                "Invalid session id '{id}': use letters, digits, '-' or '_'"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::InvalidId(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

/// Persistence of game sessions keyed by an opaque id
pub trait SessionStore {
    /// Load a session, `None` if nothing is stored under `id`
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails or holds corrupt data.
    fn load(&self, id: &str) -> Result<Option<GameSession>, StoreError>;

    /// Store a session, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the session cannot be written.
    fn save(&mut self, id: &str, session: &GameSession) -> Result<(), StoreError>;

    /// Forget a session; removing a missing session is not an error
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn remove(&mut self, id: &str) -> Result<(), StoreError>;
}

/// Check that a session id is safe to use as a file name
///
/// # Errors
/// Returns `StoreError::InvalidId` for empty ids or ids with other characters
/// than ASCII letters, digits, `-` and `_`.
pub fn validate_id(id: &str) -> Result<&str, StoreError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}
