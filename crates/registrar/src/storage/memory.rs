//! In-process key-value store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;

use super::KeyValueStore;

/// A [`KeyValueStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));

        store.set_item("k", "w").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_memory_store_with_entry() {
        let store = MemoryStore::with_entry("seed", "[]");
        assert_eq!(store.keys().unwrap(), vec!["seed"]);
    }
}
