//! In-memory session store for tests and server rendering.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::session::store::SessionStore;

/// `SessionStore` over a mutex-guarded map. TTLs are accepted and ignored;
/// entries live until removed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn set(&self, key: &str, value: &str, _ttl_days: Option<u32>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    fn clear_all(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
