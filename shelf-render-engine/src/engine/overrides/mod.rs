//! Persisted position overrides.
//!
//! Two independent maps, `book-positions` and `decor-positions`, each a JSON
//! object of `id -> [x, y, z]`. An entry always wins over the computed
//! layout. Storage is pluggable: JSON files natively, `localStorage` in the
//! browser, memory in tests.

/// In-memory map and its JSON form.
pub mod map;
/// Storage backends and their error type.
pub mod storage;
/// The `OverrideStore` resource.
pub mod store;

pub use map::OverrideMap;
pub use storage::{FileStorage, MemoryStorage, PositionStorage, StorageError, default_storage};
pub use store::{DragTarget, OverrideKind, OverrideStore};
