//! In-memory store, used by tests and for throwaway sessions

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{FinsmartError, FinsmartResult};

use super::{Store, StoreKey};

/// Store that keeps values in a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key
    pub fn with_value(self, key: StoreKey, value: impl Into<String>) -> Self {
        if let Ok(mut values) = self.values.write() {
            values.insert(key, value.into());
        }
        self
    }
}

impl Store for MemoryStore {
    fn get(&self, key: StoreKey) -> FinsmartResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| FinsmartError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: StoreKey, value: &str) -> FinsmartResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| FinsmartError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        values.insert(key, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get(StoreKey::Goals).unwrap(), None);

        store.set(StoreKey::Goals, "[]").unwrap();
        assert_eq!(store.get(StoreKey::Goals).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get(StoreKey::Transactions).unwrap(), None);
    }

    #[test]
    fn test_with_value() {
        let store = MemoryStore::new().with_value(StoreKey::Transactions, "garbage");
        assert_eq!(
            store.get(StoreKey::Transactions).unwrap().as_deref(),
            Some("garbage")
        );
    }
}
