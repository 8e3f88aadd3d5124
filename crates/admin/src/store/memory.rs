//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{StorageBackend, StoreError};

/// Ephemeral backend for tests and dry runs.
///
/// Holds raw values in a mutex-guarded map; nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the map itself is still usable.
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_key() {
        let backend = MemoryBackend::new();
        assert!(backend.read("petstore:users").unwrap().is_none());
    }

    #[test]
    fn test_write_overwrites() {
        let backend = MemoryBackend::new();
        backend.write("k", "a").unwrap();
        backend.write("k", "b").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let backend = MemoryBackend::new();
        backend.write("k", "a").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.read("k").unwrap().is_none());
    }
}
