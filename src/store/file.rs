//! JSON file-backed store.

use super::error::StoreError;
use super::StateStore;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Store keeping all keys in a single JSON object file.
///
/// The file is read once at open; every `set` rewrites it through a
/// temp-file rename so a crash mid-write leaves the previous state intact.
/// An unreadable or corrupt file opens as empty, which resolves every `get`
/// to its default.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    warn!("State file is not a JSON object, starting empty");
                    Map::new()
                }
                Err(e) => {
                    warn!(error = %e, "State file is corrupt, starting empty");
                    Map::new()
                }
            },
            Err(e) => {
                debug!(error = %e, "No readable state file, starting empty");
                Map::new()
            }
        };
        Self { path, values }
    }

    /// Default state-file location under the user data directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let dirs = ProjectDirs::from("com", "crumplecup", "tictactoe_tui")
            .ok_or_else(|| StoreError::new("No home directory available"))?;
        Ok(dirs.data_dir().join("state.json"))
    }

    /// The path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
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

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), serde_json::to_value(value)?);
        self.flush()
    }
}
