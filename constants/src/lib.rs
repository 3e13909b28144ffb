//! Frozen tables and tuning values shared across the shelf workspace.
//!
//! Nothing in here is mutable at runtime. The engine copies these values into
//! its `ShelfConfig` resource at startup so layout code never reaches for a
//! global directly.

/// Book spine palette, order-sensitive.
pub mod palette;

/// Shelf, book and decor geometry used by the packer and the scene.
pub mod shelf_geometry;

/// Drag, hover and camera tuning.
pub mod interaction;

/// Persistence namespaces and asset paths.
pub mod storage;
