use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::KeyValueStore;

/// In-memory store used by tests and non-persistent deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.data
            .lock()
            .map(|data| data.get(key).cloned())
            .map_err(|_| "failed to lock storage map".to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| "failed to lock storage map".to_string())?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| "failed to lock storage map".to_string())?;
        data.remove(key);
        Ok(())
    }
}
