use bevy::prelude::*;
use constants::interaction::DRAG_FLOOR_BOUND;
use constants::shelf_geometry::{
    BOOK_GAP, BOOKS_PER_SHELF, MIN_SHELVES, SHELF_SPACING, SHELF_SURFACE_CLEARANCE,
    SHELF_SURFACE_OFFSET,
};

use crate::engine::book::Palette;

/// Immutable layout configuration, built once at startup and handed to every
/// layout pass. Defaults come from the `constants` crate.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    pub books_per_shelf: usize,
    pub min_shelves: usize,
    /// Vertical distance between shelf origins.
    pub shelf_spacing: f32,
    /// From a shelf origin to the surface books stand on.
    pub surface_offset: f32,
    /// From a shelf origin to the base of a decor item.
    pub decor_clearance: f32,
    pub book_gap: f32,
    /// Dragged items never go below this y.
    pub floor_bound: f32,
    pub palette: Palette,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            books_per_shelf: BOOKS_PER_SHELF,
            min_shelves: MIN_SHELVES,
            shelf_spacing: SHELF_SPACING,
            surface_offset: SHELF_SURFACE_OFFSET,
            decor_clearance: SHELF_SURFACE_CLEARANCE,
            book_gap: BOOK_GAP,
            floor_bound: DRAG_FLOOR_BOUND,
            palette: Palette::default(),
        }
    }
}

impl ShelfConfig {
    /// Capacity used for chunking; zero is treated as one book per shelf.
    pub fn capacity(&self) -> usize {
        self.books_per_shelf.max(1)
    }

    /// `max(min_shelves, ceil(book_count / books_per_shelf))`.
    pub fn shelf_count(&self, book_count: usize) -> usize {
        book_count.div_ceil(self.capacity()).max(self.min_shelves)
    }

    /// y of a shelf board's origin.
    pub fn shelf_y(&self, shelf_index: usize) -> f32 {
        shelf_index as f32 * self.shelf_spacing
    }
}
