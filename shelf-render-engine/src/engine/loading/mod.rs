//! Library loading.
//!
//! The book list arrives as a JSON asset through `bevy_common_assets` and is
//! copied into the `Library` resource once the asset server has finished with
//! it, successfully or not.

/// `library.json` asset, `Library` resource and the loading systems.
pub mod library_loader;

pub use library_loader::{
    Library, LibraryLoader, LibraryManifest, poll_library_loading, start_library_loading,
};
