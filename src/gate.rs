//! Client-side access gate guarding the deck for the duration of a session.
//!
//! The unlock flag lives in a [`SessionStore`], read once when the gate is created and written
//! once on a successful submission. Once unlocked the gate never locks again.

use serde_json::Map;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{info, warn};

/// Session key holding the unlock flag.
pub const UNLOCK_KEY: &str = "decktoc:unlocked";

/// Value stored under [`UNLOCK_KEY`] once unlocked.
pub const UNLOCKED: &str = "1";

/// Message shown after a wrong credential.
pub const RETRY_MESSAGE: &str = "Incorrect password. Please try again.";

/// Key-value storage scoped to a browsing session.
pub trait SessionStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

#[derive(Clone, Debug, Default)]
/// Session store that lives only as long as the value itself.
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    #[must_use]
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug)]
/// Session store backed by a JSON file in the per-login runtime directory.
///
/// The runtime directory is cleared when the user logs out, which bounds the flag to the
/// login session rather than persisting it across sessions or machines.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    /// Store in the runtime directory, falling back to the temp directory.
    pub fn for_session() -> Self {
        let dir = dirs::runtime_dir().unwrap_or_else(std::env::temp_dir);
        Self::at(dir.join("decktoc").join("session.json"))
    }

    #[must_use]
    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Map<String, serde_json::Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.into());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&map).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of submitting a credential.
pub enum GateOutcome {
    /// The credential matched and the gate just opened.
    Unlocked,
    /// The gate was already open; nothing changed.
    AlreadyUnlocked,
    /// The credential did not match; show the message and keep the content hidden.
    Rejected(&'static str),
}

#[derive(Debug)]
/// Compares submissions against a fixed credential and records unlocks in the session.
pub struct AccessGate<S: SessionStore> {
    credential: String,
    store: S,
    unlocked: bool,
}

impl<S: SessionStore> AccessGate<S> {
    /// Creates the gate, opening it straight away if this session already unlocked.
    pub fn new(credential: impl Into<String>, store: S) -> Self {
        let unlocked = store.get(UNLOCK_KEY).as_deref() == Some(UNLOCKED);
        if unlocked {
            info!("session already unlocked; skipping prompt");
        }
        Self {
            credential: credential.into(),
            store,
            unlocked,
        }
    }

    #[must_use]
    /// Whether the content may be shown.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    /// The session store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Checks a submitted credential.
    ///
    /// A match opens the gate and persists the session flag. A failed write is logged and does
    /// not keep the gate closed. Retries are unlimited.
    pub fn submit(&mut self, input: &str) -> GateOutcome {
        if self.unlocked {
            return GateOutcome::AlreadyUnlocked;
        }
        if input != self.credential {
            return GateOutcome::Rejected(RETRY_MESSAGE);
        }
        self.unlocked = true;
        if let Err(e) = self.store.set(UNLOCK_KEY, UNLOCKED) {
            warn!(error = %e, "failed to persist session unlock");
        }
        info!("deck unlocked");
        GateOutcome::Unlocked
    }
}

#[cfg(test)]
#[path = "tests/gate.rs"]
mod tests;
