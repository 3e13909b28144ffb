use bevy::prelude::*;
use constants::storage::{BOOK_POSITIONS_KEY, DECOR_POSITIONS_KEY};

use super::map::OverrideMap;
use super::storage::{MemoryStorage, PositionStorage};

/// Which override map an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKind {
    Book,
    Decor,
}

impl OverrideKind {
    pub fn namespace(self) -> &'static str {
        match self {
            Self::Book => BOOK_POSITIONS_KEY,
            Self::Decor => DECOR_POSITIONS_KEY,
        }
    }
}

/// Something that can be dragged and pinned: an item id plus the map it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragTarget {
    pub kind: OverrideKind,
    pub id: String,
}

impl DragTarget {
    pub fn book(id: impl Into<String>) -> Self {
        Self {
            kind: OverrideKind::Book,
            id: id.into(),
        }
    }

    pub fn decor(id: impl Into<String>) -> Self {
        Self {
            kind: OverrideKind::Decor,
            id: id.into(),
        }
    }
}

/// User-pinned positions for books and decor.
///
/// The in-memory maps are authoritative for the running session. Every write
/// goes straight through to the backing storage, and any storage failure is
/// logged and otherwise ignored.
#[derive(Resource)]
pub struct OverrideStore {
    books: OverrideMap,
    decor: OverrideMap,
    storage: Box<dyn PositionStorage>,
}

impl OverrideStore {
    /// Read both maps from `storage`. Unreadable or malformed namespaces
    /// start empty.
    pub fn load(storage: Box<dyn PositionStorage>) -> Self {
        let books = read_map(storage.as_ref(), OverrideKind::Book);
        let decor = read_map(storage.as_ref(), OverrideKind::Decor);
        info!(
            "Loaded {} book and {} decor position overrides",
            books.len(),
            decor.len()
        );
        Self {
            books,
            decor,
            storage,
        }
    }

    /// Store with nothing persisted beyond the process.
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStorage::new()))
    }

    pub fn get(&self, kind: OverrideKind, id: &str) -> Option<Vec3> {
        self.map(kind).get(id)
    }

    pub fn book(&self, id: &str) -> Option<Vec3> {
        self.books.get(id)
    }

    pub fn decor(&self, id: &str) -> Option<Vec3> {
        self.decor.get(id)
    }

    pub fn books(&self) -> &OverrideMap {
        &self.books
    }

    pub fn decor_map(&self) -> &OverrideMap {
        &self.decor
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.decor.is_empty()
    }

    /// Pin `id` at `position` and persist the owning map.
    ///
    /// Non-finite positions are dropped so a bad projection can never reach
    /// storage.
    pub fn set(&mut self, kind: OverrideKind, id: &str, position: Vec3) {
        if !position.is_finite() {
            warn!("Ignoring non-finite position {position} for `{id}`");
            return;
        }

        self.map_mut(kind).insert(id, position);
        debug!("Pinned `{id}` at {position}");
        self.persist(kind);
    }

    /// Clear both maps and erase their persisted state.
    pub fn reset_all(&mut self) {
        self.books.clear();
        self.decor.clear();

        for kind in [OverrideKind::Book, OverrideKind::Decor] {
            if let Err(err) = self.storage.remove(kind.namespace()) {
                warn!("Failed to erase persisted overrides: {err}");
            }
        }
        info!("All position overrides reset");
    }

    fn map(&self, kind: OverrideKind) -> &OverrideMap {
        match kind {
            OverrideKind::Book => &self.books,
            OverrideKind::Decor => &self.decor,
        }
    }

    fn map_mut(&mut self, kind: OverrideKind) -> &mut OverrideMap {
        match kind {
            OverrideKind::Book => &mut self.books,
            OverrideKind::Decor => &mut self.decor,
        }
    }

    fn persist(&self, kind: OverrideKind) {
        let namespace = kind.namespace();
        let result = self
            .map(kind)
            .to_json(namespace)
            .and_then(|blob| self.storage.save(namespace, &blob));

        if let Err(err) = result {
            warn!("Override kept for this session only: {err}");
        }
    }
}

fn read_map(storage: &dyn PositionStorage, kind: OverrideKind) -> OverrideMap {
    let namespace = kind.namespace();
    let blob = match storage.load(namespace) {
        Ok(Some(blob)) => blob,
        Ok(None) => return OverrideMap::default(),
        Err(err) => {
            warn!("Starting with no overrides: {err}");
            return OverrideMap::default();
        }
    };

    OverrideMap::from_json(namespace, &blob).unwrap_or_else(|err| {
        warn!("Discarding stored overrides: {err}");
        OverrideMap::default()
    })
}

#[cfg(test)]
mod tests {
    use super::super::storage::StorageError;
    use super::*;

    /// Reads nothing, refuses every write.
    struct FullStorage;

    impl PositionStorage for FullStorage {
        fn load(&self, _namespace: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn save(&self, _namespace: &str, _blob: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _namespace: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn malformed_blob_loads_as_empty() {
        let storage = MemoryStorage::new()
            .with_blob(BOOK_POSITIONS_KEY, "{\"b1\": [1, 2")
            .with_blob(DECOR_POSITIONS_KEY, r#"{"decor-left-1":[-3.0,3.0,0.5]}"#);
        let store = OverrideStore::load(Box::new(storage));

        assert!(store.books().is_empty());
        assert_eq!(store.decor("decor-left-1"), Some(Vec3::new(-3.0, 3.0, 0.5)));
    }

    #[test]
    fn set_persists_immediately() {
        let storage = MemoryStorage::new();
        let mut store = OverrideStore::load(Box::new(storage.clone()));

        store.set(OverrideKind::Book, "b1", Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(
            storage.blob(BOOK_POSITIONS_KEY).as_deref(),
            Some(r#"{"b1":[1.0,2.0,3.0]}"#)
        );
        assert!(storage.blob(DECOR_POSITIONS_KEY).is_none());

        let reloaded = OverrideStore::load(Box::new(storage));
        assert_eq!(reloaded.book("b1"), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn write_failure_keeps_session_value() {
        let mut store = OverrideStore::load(Box::new(FullStorage));
        store.set(OverrideKind::Decor, "decor-right-0", Vec3::new(3.0, 0.5, 0.0));
        assert_eq!(store.decor("decor-right-0"), Some(Vec3::new(3.0, 0.5, 0.0)));

        store.reset_all();
        assert!(store.is_empty());
    }

    #[test]
    fn non_finite_positions_are_ignored() {
        let mut store = OverrideStore::in_memory();
        store.set(OverrideKind::Book, "b1", Vec3::new(f32::NAN, 1.0, 0.0));
        store.set(OverrideKind::Book, "b2", Vec3::new(0.0, f32::INFINITY, 0.0));
        assert!(store.is_empty());
    }

    #[test]
    fn reset_clears_both_maps_and_storage() {
        let storage = MemoryStorage::new();
        let mut store = OverrideStore::load(Box::new(storage.clone()));
        store.set(OverrideKind::Book, "b1", Vec3::ONE);
        store.set(OverrideKind::Decor, "decor-left-1", Vec3::ONE);

        store.reset_all();

        assert!(store.is_empty());
        assert!(storage.blob(BOOK_POSITIONS_KEY).is_none());
        assert!(storage.blob(DECOR_POSITIONS_KEY).is_none());
    }

    #[test]
    fn books_and_decor_are_independent() {
        let mut store = OverrideStore::in_memory();
        store.set(OverrideKind::Book, "shared", Vec3::X);
        assert_eq!(store.get(OverrideKind::Book, "shared"), Some(Vec3::X));
        assert_eq!(store.get(OverrideKind::Decor, "shared"), None);
    }
}
