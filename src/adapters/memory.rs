use crate::domain::ports::KeyValueStore;
use crate::utils::error::{PawPlanError, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-process key/value storage. Nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| PawPlanError::storage("memory storage lock poisoned"))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let storage = MemoryStorage::new();
        assert!(storage.get("k").unwrap().is_none());

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len().unwrap(), 1);

        storage.clear("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
        assert!(storage.is_empty().unwrap());

        // clearing a missing key is not an error
        storage.clear("k").unwrap();
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = storage.entries.lock().unwrap();
            panic!("poison the lock");
        }));

        assert!(matches!(storage.len(), Err(PawPlanError::StorageError { .. })));
        assert!(storage.is_empty().is_err());
        assert!(storage.get("k").is_err());
    }
}
