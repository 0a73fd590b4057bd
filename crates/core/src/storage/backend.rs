use std::collections::HashMap;

use crate::errors::CoreError;

/// Narrow key/value persistence abstraction.
///
/// In the browser build the frontend wraps `localStorage` behind this
/// trait; tests and native builds use the in-memory and file backends
/// below. The store never assumes anything about durability beyond
/// "read returns what the last write stored".
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Remove the entry under `key`. Removing an absent key is fine.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

/// Volatile in-memory backend. Used in tests and as the default when no
/// persistent storage is wired up.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-based backend (native only): one JSON object per file, keys
/// mapped to string values. Reads the file on every access — the data is
/// tiny and the simplicity beats caching.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileBackend {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_map(&self) -> Result<HashMap<String, String>, CoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Storage(format!("Backend file is not valid JSON: {e}")))
    }

    fn store_map(&self, map: &HashMap<String, String>) -> Result<(), CoreError> {
        let raw = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.load_map()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut map = self.load_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.store_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        let mut map = self.load_map().unwrap_or_default();
        map.remove(key);
        self.store_map(&map)
    }
}
