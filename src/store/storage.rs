/// Trait for scoped key-value storage backends. Values are serialized blobs;
/// every write overwrites the whole value for its key.
pub trait ScopedStorage: Send + Sync {
    /// Read the blob stored under `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>>;
}

impl<S: ScopedStorage + ?Sized> ScopedStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        (**self).set(key, value)
    }
}
