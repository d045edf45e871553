use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::storage::KeyValueStore;

/// JSON-file-backed store.
///
/// The whole map is rewritten on every mutation; the mutex makes each
/// read or write atomic relative to this process. A missing file reads
/// as an empty map.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, String> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|error| error.to_string())?;
        serde_json::from_str(&data).map_err(|error| error.to_string())
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|error| error.to_string())?;
        }
        let data = serde_json::to_string_pretty(map).map_err(|error| error.to_string())?;
        fs::write(&self.path, data).map_err(|error| error.to_string())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| "failed to lock storage file".to_string())?;
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| "failed to lock storage file".to_string())?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| "failed to lock storage file".to_string())?;
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
