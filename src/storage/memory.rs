//! In-memory key-value backend

use std::collections::HashMap;

use crate::error::{RunwayError, RunwayResult};

use super::KeyValueStore;

/// Key-value store held in a `HashMap`
///
/// Writes can be made to fail with [`MemoryStore::set_fail_writes`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fail_writes: false,
        }
    }

    /// Make every subsequent `set`/`remove` fail (or succeed again)
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> RunwayResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> RunwayResult<()> {
        if self.fail_writes {
            return Err(RunwayError::Persistence(format!(
                "Write to '{}' rejected",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> RunwayResult<()> {
        if self.fail_writes {
            return Err(RunwayError::Persistence(format!(
                "Remove of '{}' rejected",
                key
            )));
        }
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = MemoryStore::new();
        store.set("expenses", "{}").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("{}"));
        assert_eq!(store.get("budget").unwrap(), None);
    }

    #[test]
    fn test_fail_writes() {
        let mut store = MemoryStore::with_entries([("budget", "old")]);
        store.set_fail_writes(true);

        let err = store.set("budget", "new").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.raw("budget"), Some("old"));

        store.set_fail_writes(false);
        store.set("budget", "new").unwrap();
        assert_eq!(store.raw("budget"), Some("new"));
    }
}
