use rustc_hash::FxHashMap;
use thiserror::Error;

/// Key under which the ordered element collection is saved.
pub const LAYOUT_KEY: &str = "layout_elements";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable string key-value storage.
///
/// Calls are synchronous and complete before returning; partial writes are
/// the implementation's problem.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, used by tests and for sessions that should not touch disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        MemoryStore {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_memory_store_round_trip() -> Result<()> {
        let mut store = MemoryStore::new();
        assert!(store.get(LAYOUT_KEY).is_none());

        store.set(LAYOUT_KEY, "[]".to_string())?;
        assert_eq!(store.get(LAYOUT_KEY).as_deref(), Some("[]"));

        store.set(LAYOUT_KEY, "[1]".to_string())?;
        assert_eq!(store.get(LAYOUT_KEY).as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);

        store.remove(LAYOUT_KEY)?;
        assert!(store.get(LAYOUT_KEY).is_none());
        assert!(store.is_empty());

        // Removing again is fine
        store.remove(LAYOUT_KEY)?;
        Ok(())
    }

    #[test]
    fn test_memory_store_from_entries() {
        let store: MemoryStore = hashmap! {
            "theme" => "dark",
            LAYOUT_KEY => "[]",
        }
        .into_iter()
        .collect();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_boxed_store() -> Result<()> {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v".to_string())?;
        assert_eq!(store.get("k").as_deref(), Some("v"));
        Ok(())
    }
}
