use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::storage::LIBRARY_ASSET_PATH;
use serde::{Deserialize, Serialize};

use crate::engine::book::BookRecord;
use crate::engine::scene::ShelfLayoutDirty;

/// `library.json` as a bevy asset: a bare JSON array of book records.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryManifest {
    pub books: Vec<BookRecord>,
}

/// Books currently on the shelf, in library order.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Library {
    pub books: Vec<BookRecord>,
}

impl Library {
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        let manifest: LibraryManifest = serde_json::from_str(blob)?;
        Ok(Self {
            books: manifest.books,
        })
    }
}

#[derive(Resource, Default)]
pub struct LibraryLoader {
    handle: Option<Handle<LibraryManifest>>,
    finished: bool,
}

impl LibraryLoader {
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }
}

pub fn start_library_loading(mut loader: ResMut<LibraryLoader>, asset_server: Res<AssetServer>) {
    info!("Loading library from {LIBRARY_ASSET_PATH}");
    loader.handle = Some(asset_server.load(LIBRARY_ASSET_PATH));
}

/// Move the loaded library into the `Library` resource. A missing or
/// unparsable file leaves the shelf empty.
pub fn poll_library_loading(
    mut loader: ResMut<LibraryLoader>,
    mut library: ResMut<Library>,
    mut dirty: ResMut<ShelfLayoutDirty>,
    manifests: Res<Assets<LibraryManifest>>,
    asset_server: Res<AssetServer>,
) {
    if loader.finished {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!("✓ Library loaded: {} books", manifest.books.len());
        library.books = manifest.books.clone();
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Library unavailable, showing an empty shelf: {err}");
        library.books.clear();
    } else {
        return;
    }

    loader.finish();
    dirty.0 = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_library_export() {
        let blob = r#"[
            {"id": "OL1M", "title": "Dune", "authors": ["Frank Herbert"], "numberOfPages": 412,
             "addedAt": "2024-03-01T10:00:00.000Z"},
            {"id": "OL2M", "title": "Untitled"}
        ]"#;
        let library = Library::from_json(blob).unwrap();
        assert_eq!(library.books.len(), 2);
        assert_eq!(library.books[0].pages(), 412);
        assert_eq!(library.books[1].pages(), 0);
    }

    #[test]
    fn rejects_non_array() {
        assert!(Library::from_json(r#"{"books": []}"#).is_err());
    }
}
