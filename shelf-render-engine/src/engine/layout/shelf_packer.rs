use bevy::prelude::*;

use super::config::ShelfConfig;
use crate::engine::book::{BookRecord, Dimensions, derive_dimensions, hash_identity};

/// Computed resting slot for one book.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedSlot {
    /// The record's identity, which also keys its override.
    pub id: String,
    /// Position of the book in the library sequence.
    pub ordinal: usize,
    pub shelf_index: usize,
    /// Centre of the book along the shelf.
    pub x: f32,
    pub dimensions: Dimensions,
}

impl PackedSlot {
    /// Standing position on the shelf surface, spine flush with z = 0.
    pub fn resting_position(&self, config: &ShelfConfig) -> Vec3 {
        let y = config.shelf_y(self.shelf_index)
            + config.surface_offset
            + self.dimensions.height / 2.0;
        Vec3::new(self.x, y, 0.0)
    }
}

/// Pack books left to right into centred rows of `books_per_shelf`.
///
/// Single pass, no reordering. Each shelf's row width is the sum of its
/// books' widths plus one gap between each neighbour, and the row starts at
/// `-width / 2` so it sits symmetric about x = 0. Rows wider than the board
/// are left as they are.
pub fn pack(books: &[BookRecord], config: &ShelfConfig) -> Vec<PackedSlot> {
    let mut slots = Vec::with_capacity(books.len());

    for (shelf_index, shelf) in books.chunks(config.capacity()).enumerate() {
        let first_ordinal = shelf_index * config.capacity();
        let dimensions: Vec<Dimensions> = shelf
            .iter()
            .map(|book| derive_dimensions(hash_identity(book.identity()), book.pages()))
            .collect();

        let row_width = dimensions.iter().map(|d| d.width).sum::<f32>()
            + (shelf.len() - 1) as f32 * config.book_gap;

        let mut cursor = -row_width / 2.0;
        for (offset, (book, dims)) in shelf.iter().zip(dimensions).enumerate() {
            slots.push(PackedSlot {
                id: book.identity().to_owned(),
                ordinal: first_ordinal + offset,
                shelf_index,
                x: cursor + dims.width / 2.0,
                dimensions: dims,
            });
            cursor += dims.width + config.book_gap;
        }
    }

    slots
}
