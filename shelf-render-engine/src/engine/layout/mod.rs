//! Shelf layout: where every book and ornament goes.
//!
//! Layout is a pure recompute from the library, the configuration and the
//! override store. Nothing here holds state between passes; the scene calls
//! [`ShelfLayout::compute`] whenever one of its inputs changes.

/// Injected layout configuration.
pub mod config;
/// Ornament slots at the shelf ends.
pub mod decor;
/// Row packing for books without an override.
pub mod shelf_packer;

use bevy::prelude::*;

use crate::engine::book::{BookFinish, BookRecord, ColorSpec, Dimensions, derive_attributes, hash_identity};
use crate::engine::overrides::OverrideStore;

pub use config::ShelfConfig;
pub use decor::{DecorKind, DecorSide, DecorSlot, decor_id, decor_slots};
pub use shelf_packer::{PackedSlot, pack};

/// One book, positioned and styled, for a single layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub id: String,
    pub ordinal: usize,
    pub shelf_index: usize,
    pub position: Vec3,
    pub dimensions: Dimensions,
    pub colour: ColorSpec,
    pub finish: BookFinish,
    /// Position came from the override store rather than the packer.
    pub overridden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDecor {
    pub slot: DecorSlot,
    pub position: Vec3,
    pub overridden: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShelfLayout {
    pub shelf_count: usize,
    pub books: Vec<PlacedItem>,
    pub decor: Vec<PlacedDecor>,
}

impl ShelfLayout {
    pub fn compute(books: &[BookRecord], config: &ShelfConfig, overrides: &OverrideStore) -> Self {
        Self {
            shelf_count: config.shelf_count(books.len()),
            books: layout(books, config, overrides),
            decor: place_decor(books.len(), config, overrides),
        }
    }
}

/// Place every book. An override, when present, replaces the packed position
/// outright.
pub fn layout(books: &[BookRecord], config: &ShelfConfig, overrides: &OverrideStore) -> Vec<PlacedItem> {
    pack(books, config)
        .into_iter()
        .zip(books)
        .map(|(slot, book)| {
            let hash = hash_identity(book.identity());
            let attributes = derive_attributes(hash, book, slot.ordinal, &config.palette);
            let pinned = overrides.book(&slot.id);

            PlacedItem {
                position: pinned.unwrap_or_else(|| slot.resting_position(config)),
                overridden: pinned.is_some(),
                dimensions: attributes.dimensions,
                colour: attributes.colour,
                finish: attributes.finish,
                ordinal: slot.ordinal,
                shelf_index: slot.shelf_index,
                id: slot.id,
            }
        })
        .collect()
}

fn place_decor(book_count: usize, config: &ShelfConfig, overrides: &OverrideStore) -> Vec<PlacedDecor> {
    decor_slots(book_count, config)
        .into_iter()
        .map(|slot| {
            let pinned = overrides.decor(&slot.id);
            PlacedDecor {
                position: pinned.unwrap_or(slot.default_position),
                overridden: pinned.is_some(),
                slot,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::overrides::OverrideKind;

    fn library(count: usize) -> Vec<BookRecord> {
        (1..=count)
            .map(|i| BookRecord::new(format!("b{i}"), format!("Book {i}")))
            .collect()
    }

    #[test]
    fn override_wins_over_packing() {
        let books = library(7);
        let config = ShelfConfig::default();
        let mut overrides = OverrideStore::in_memory();
        overrides.set(OverrideKind::Book, "b1", Vec3::new(1.0, 2.0, 3.0));

        let placed = layout(&books, &config, &overrides);

        assert_eq!(placed[0].id, "b1");
        assert_eq!(placed[0].position, Vec3::new(1.0, 2.0, 3.0));
        assert!(placed[0].overridden);
        assert!(placed[1..].iter().all(|item| !item.overridden));
    }

    #[test]
    fn neighbours_keep_their_packed_slots() {
        let books = library(5);
        let config = ShelfConfig::default();
        let plain = layout(&books, &config, &OverrideStore::in_memory());

        let mut overrides = OverrideStore::in_memory();
        overrides.set(OverrideKind::Book, "b3", Vec3::new(-9.0, 9.0, 0.0));
        let pinned = layout(&books, &config, &overrides);

        for i in [0, 1, 3, 4] {
            assert_eq!(plain[i].position, pinned[i].position);
        }
    }

    #[test]
    fn pinning_a_book_without_an_id_leaves_its_neighbours_alone() {
        let books = vec![BookRecord::new("", "Dune"), BookRecord::new("", "Emma")];
        let config = ShelfConfig::default();
        let mut overrides = OverrideStore::in_memory();
        overrides.set(OverrideKind::Book, "Emma", Vec3::new(2.0, 2.0, 0.0));

        let placed = layout(&books, &config, &overrides);

        assert!(!placed[0].overridden);
        assert!(placed[1].overridden);
        assert_eq!(placed[1].position, Vec3::new(2.0, 2.0, 0.0));
        assert!(overrides.book("").is_none());
    }

    #[test]
    fn decor_override_replaces_default() {
        let config = ShelfConfig::default();
        let mut overrides = OverrideStore::in_memory();
        overrides.set(OverrideKind::Decor, "decor-left-1", Vec3::new(-2.0, 4.0, 0.5));

        let scene = ShelfLayout::compute(&library(15), &config, &overrides);

        assert_eq!(scene.shelf_count, 3);
        let left = scene
            .decor
            .iter()
            .find(|d| d.slot.id == "decor-left-1")
            .unwrap();
        assert_eq!(left.position, Vec3::new(-2.0, 4.0, 0.5));
        assert!(left.overridden);
    }

    #[test]
    fn books_carry_derived_attributes() {
        let books = library(3);
        let config = ShelfConfig::default();
        let placed = layout(&books, &config, &OverrideStore::in_memory());

        for item in &placed {
            let hash = hash_identity(&item.id);
            let expected = derive_attributes(hash, &books[item.ordinal], item.ordinal, &config.palette);
            assert_eq!(item.dimensions, expected.dimensions);
            assert_eq!(item.colour, expected.colour);
        }
    }
}
