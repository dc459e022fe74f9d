use std::collections::HashMap;

use parking_lot::Mutex;

use super::{KvBackend, StorageError};

/// Process-local backend. `unavailable()` builds one that refuses every call,
/// standing in for storage that is switched off.
#[derive(Debug)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    available: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: false,
        }
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl KvBackend for MemoryBackend {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<String>) -> Result<String, StorageError>,
    ) -> Result<(), StorageError> {
        self.ensure_available()?;
        let mut entries = self.entries.lock();
        let next = f(entries.get(key).cloned())?;
        entries.insert(key.to_string(), next);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.entries.lock().remove(key);
        Ok(())
    }
}
