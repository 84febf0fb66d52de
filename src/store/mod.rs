//! Key/value persistence for game state.
//!
//! The game controller only ever talks to [`StateStore`]: JSON-serializable
//! values behind `get` (with a default fallback) and `set`. Missing or
//! unreadable values silently resolve to the caller's default, so a corrupt
//! store resumes the game from scratch rather than failing.

mod error;
mod file;

pub use error::StoreError;
pub use file::JsonFileStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Store key for the currently viewed step.
pub const STEP_KEY: &str = "game:step";
/// Store key for the recorded board history.
pub const HISTORY_KEY: &str = "game:history";

/// A key/value store with JSON-serializable values and default fallback.
pub trait StateStore {
    /// Returns the value stored under `key`, or `default` when the key is
    /// missing or its value does not deserialize as `T`.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    /// Stores `value` under `key`.
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral play.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.values.get(key) {
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(key, error = %e, "Stored value is unreadable, using default");
                    default
                }
            },
            None => default,
        }
    }

    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }
}
