use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use constants::storage::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access `{namespace}`: {source}")]
    Io {
        namespace: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed position data in `{namespace}`: {source}")]
    Malformed {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode `{namespace}`: {source}")]
    Encode {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Key/value blob store behind the override maps. One blob per namespace.
pub trait PositionStorage: Send + Sync {
    /// `Ok(None)` when nothing has been saved under `namespace` yet.
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError>;

    fn save(&self, namespace: &str, blob: &str) -> Result<(), StorageError>;

    /// Removing a namespace that does not exist is not an error.
    fn remove(&self, namespace: &str) -> Result<(), StorageError>;
}

/// One `<namespace>.json` file per map inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory from `SHELF_DATA_DIR`, or `shelf_data/` in the working directory.
    pub fn from_env() -> Self {
        let directory = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::new(directory)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.directory.join(format!("{namespace}.json"))
    }
}

fn io_error(namespace: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        namespace: namespace.to_string(),
        source,
    }
}

impl PositionStorage for FileStorage {
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(namespace)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(namespace, err)),
        }
    }

    fn save(&self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.directory).map_err(|err| io_error(namespace, err))?;
        fs::write(self.path_for(namespace), blob).map_err(|err| io_error(namespace, err))
    }

    fn remove(&self, namespace: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(namespace)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(namespace, err)),
        }
    }
}

/// Process-local storage. Clones share the same blobs, which lets two stores
/// see each other's writes as if across a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a namespace, e.g. with a corrupt blob.
    pub fn with_blob(self, namespace: &str, blob: &str) -> Self {
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(namespace.to_string(), blob.to_string());
        }
        self
    }

    pub fn blob(&self, namespace: &str) -> Option<String> {
        self.blobs.lock().ok()?.get(namespace).cloned()
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("memory storage lock poisoned".to_string())
    }
}

impl PositionStorage for MemoryStorage {
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        let blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        Ok(blobs.get(namespace).cloned())
    }

    fn save(&self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        let mut blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        blobs.insert(namespace.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, namespace: &str) -> Result<(), StorageError> {
        let mut blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        blobs.remove(namespace);
        Ok(())
    }
}

/// Browser `window.localStorage`, keyed by namespace.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PositionStorage for LocalStorage {
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(namespace)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn save(&self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        // Quota errors surface here.
        Self::storage()?
            .set_item(namespace, blob)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn remove(&self, namespace: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(namespace)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}

/// Platform default: localStorage in the browser, JSON files natively.
pub fn default_storage() -> Box<dyn PositionStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileStorage::from_env())
    }
}
