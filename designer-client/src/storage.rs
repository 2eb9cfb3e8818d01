use directories::ProjectDirs;
use layout_designer::{KeyValueStore, StorageError};
use sha2::{Digest, Sha256};
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

type Result<T> = std::result::Result<T, StorageError>;

/// Key-value store kept in one JSON file per origin.
///
/// The whole map is rewritten on every change. Writes go to a temporary
/// file that is then renamed over the old one, so a crash mid-write leaves
/// the previous contents in place.
pub struct FileStore {
    entries: BTreeMap<String, String>,
    path: PathBuf,
    origin: String,
}

impl FileStore {
    /// Opens the store for `origin` under the platform data directory.
    pub fn open(origin: &str) -> Result<Self> {
        let storage_dir = Self::default_storage_dir()?;
        Self::new_with_dir(origin, storage_dir)
    }

    /// Opens the store for `origin` under a custom directory, which is
    /// created when missing.
    pub fn new_with_dir(origin: &str, storage_dir: impl AsRef<Path>) -> Result<Self> {
        let storage_dir = storage_dir.as_ref();
        fs::create_dir_all(storage_dir)?;

        let path = storage_dir.join(file_name(origin));
        let entries = load(&path, origin);

        Ok(FileStore {
            entries,
            path,
            origin: origin.to_string(),
        })
    }

    pub fn default_storage_dir() -> Result<PathBuf> {
        ProjectDirs::from("org", "layout-designer", "layout-designer")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                StorageError::Unavailable(
                    "could not determine platform storage directory".to_string(),
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        log::debug!(
            "Saved {} entries for origin '{}' to {}",
            self.entries.len(),
            self.origin,
            self.path.display()
        );
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// File name for an origin: the origin reduced to a safe character set,
/// followed by the SHA-256 of the raw origin so that origins which sanitise
/// to the same text still get separate files.
pub fn file_name(origin: &str) -> String {
    let sanitised: String = origin
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let hash = Sha256::digest(origin.as_bytes());
    let hash_hex: String = hash.iter().map(|b| format!("{:02x}", b)).collect();

    format!("{}-{}.json", sanitised, hash_hex)
}

fn load(path: &Path, origin: &str) -> BTreeMap<String, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No storage file for origin '{}'", origin);
            return BTreeMap::new();
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };

    match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
        Ok(entries) => {
            log::debug!(
                "Loaded {} entries for origin '{}'",
                entries.len(),
                origin
            );
            entries
        }
        Err(e) => {
            log::warn!(
                "Ignoring unreadable storage file {}: {}",
                path.display(),
                e
            );
            BTreeMap::new()
        }
    }
}
