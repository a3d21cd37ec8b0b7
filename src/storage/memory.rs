//! Volatile in-memory snapshot store

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::AppResult;

use super::KeyValueStore;

/// Keeps snapshots in a map; nothing survives the process.
/// Used by tests and by runs that do not want a data directory.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| crate::error::AppError::Internal("store mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::error::AppError::Internal("store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
