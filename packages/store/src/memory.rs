use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory session storage for tests and as the fallback when no
/// platform storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn clear(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.save("k", "v");
        assert_eq!(b.load("k").as_deref(), Some("v"));
        b.clear("k");
        assert!(a.load("k").is_none());
    }
}
