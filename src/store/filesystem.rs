use super::storage::ScopedStorage;
use std::fs;
use std::path::PathBuf;

/// Filesystem-backed scoped storage. Each key is one JSON file under the
/// user's cache directory.
pub struct FilesystemStorage {
    base_dir: PathBuf,
}

impl FilesystemStorage {
    pub fn new() -> Self {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cache")
            .join("tamly");
        Self { base_dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl ScopedStorage for FilesystemStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir)?;
        }
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

impl Default for FilesystemStorage {
    fn default() -> Self {
        Self::new()
    }
}
