use super::storage::ScopedStorage;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory scoped storage. Used for tests and for ephemeral sessions that
/// should not persist across restarts.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScopedStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.values
            .lock()
            .map_err(|_| "storage mutex poisoned")?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
