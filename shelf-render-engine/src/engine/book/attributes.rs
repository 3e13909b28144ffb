use bevy::prelude::*;
use constants::palette::{LABEL_INK_DARK, LABEL_INK_LIGHT, LABEL_LUMINANCE_THRESHOLD};
use constants::shelf_geometry::{
    BASE_BOOK_DEPTH, BASE_BOOK_HEIGHT, BASE_BOOK_WIDTH, MAX_PAGE_HEIGHT_BONUS, PAGE_HEIGHT_DIVISOR,
};

use super::colour::{ColorSpec, Palette, Rgb, label_colour, vary_colour};
use super::record::BookRecord;

/// Physical size of a book standing upright, spine facing +Z.
/// `width` is the spine thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub height: f32,
    pub width: f32,
    pub depth: f32,
}

impl Dimensions {
    /// Box extents in world axes (x = width, y = height, z = depth).
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

/// Per-axis offsets from the base book size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionVariation {
    pub height: f32,
    pub width: f32,
    pub depth: f32,
}

/// Signed, truncating remainders of the hash. A negative hash gives negative
/// remainders; that asymmetry is part of the stable output.
pub fn dimension_variation(hash: i32) -> DimensionVariation {
    DimensionVariation {
        height: ((hash % 30) - 15) as f32 * 0.01,
        width: (((hash >> 4) % 20) - 10) as f32 * 0.01,
        depth: (((hash >> 8) % 15) - 7) as f32 * 0.01,
    }
}

pub fn derive_dimensions(hash: i32, pages: u32) -> Dimensions {
    let variation = dimension_variation(hash);
    let page_bonus = (pages as f32 / PAGE_HEIGHT_DIVISOR).min(MAX_PAGE_HEIGHT_BONUS);

    Dimensions {
        height: BASE_BOOK_HEIGHT + variation.height + page_bonus,
        width: BASE_BOOK_WIDTH + variation.width,
        depth: BASE_BOOK_DEPTH + variation.depth,
    }
}

/// Cover material family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFinish {
    Cloth,
    Paper,
}

impl BookFinish {
    /// Two in three books get cloth.
    pub fn from_hash(hash: i32) -> Self {
        if hash % 3 != 0 { Self::Cloth } else { Self::Paper }
    }

    pub fn roughness(self) -> f32 {
        match self {
            Self::Cloth => 0.85,
            Self::Paper => 0.7,
        }
    }

    pub fn metalness(self) -> f32 {
        match self {
            Self::Cloth => 0.0,
            Self::Paper => 0.02,
        }
    }
}

/// Everything the scene needs to draw one book, apart from its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookAttributes {
    pub dimensions: Dimensions,
    pub colour: ColorSpec,
    pub finish: BookFinish,
}

/// Derive size, colour and finish for the book at `ordinal` in the library.
pub fn derive_attributes(
    hash: i32,
    book: &BookRecord,
    ordinal: usize,
    palette: &Palette,
) -> BookAttributes {
    let base = palette.pick(hash, ordinal);
    let varied = vary_colour(base, hash);
    let label = label_colour(
        varied,
        LABEL_LUMINANCE_THRESHOLD,
        Rgb::from_packed(LABEL_INK_DARK),
        Rgb::from_packed(LABEL_INK_LIGHT),
    );

    BookAttributes {
        dimensions: derive_dimensions(hash, book.pages()),
        colour: ColorSpec { base, varied, label },
        finish: BookFinish::from_hash(hash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::book::hash::hash_identity;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn book_hash_variations() {
        let variation = dimension_variation(3029737);
        assert!(close(variation.height, -0.08));
        assert!(close(variation.width, 0.08));
        assert!(close(variation.depth, 0.07));
    }

    #[test]
    fn negative_hash_uses_truncating_remainder() {
        // -7 % 30 = -7 -> (-7 - 15) * 0.01
        let variation = dimension_variation(-7);
        assert!(close(variation.height, -0.22));
        // -7 >> 4 = -1 -> (-1 - 10) * 0.01
        assert!(close(variation.width, -0.11));
        // -7 >> 8 = -1 -> (-1 - 7) * 0.01
        assert!(close(variation.depth, -0.08));
    }

    #[test]
    fn page_count_raises_height_up_to_cap() {
        let hash = hash_identity("book");
        let none = derive_dimensions(hash, 0);
        let some = derive_dimensions(hash, 150);
        let many = derive_dimensions(hash, 5000);
        assert!(close(none.height, 1.92));
        assert!(close(some.height, 2.07));
        assert!(close(many.height, 2.22));
        assert!(close(none.width, 0.40));
        assert!(close(none.depth, 1.57));
    }

    #[test]
    fn dimensions_stay_positive_for_extreme_hashes() {
        for hash in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX, -123_456_789] {
            let dims = derive_dimensions(hash, 0);
            assert!(dims.height > 0.0 && dims.width > 0.0 && dims.depth > 0.0, "{hash}");
        }
    }

    #[test]
    fn finish_follows_hash_mod_three() {
        assert_eq!(BookFinish::from_hash(9), BookFinish::Paper);
        assert_eq!(BookFinish::from_hash(10), BookFinish::Cloth);
        assert_eq!(BookFinish::from_hash(-3), BookFinish::Paper);
    }

    #[test]
    fn attributes_are_reproducible() {
        let book = BookRecord::new("b1", "Dune").with_pages(412);
        let palette = Palette::default();
        let hash = hash_identity(book.identity());
        let first = derive_attributes(hash, &book, 4, &palette);
        let second = derive_attributes(hash, &book, 4, &palette);
        assert_eq!(first, second);
        assert_eq!(first.colour.base, palette.pick(hash, 4));
    }

    #[test]
    fn ordinal_moves_palette_slot() {
        let book = BookRecord::new("b1", "Dune");
        let palette = Palette::default();
        let hash = hash_identity(book.identity());
        let a = derive_attributes(hash, &book, 0, &palette);
        let b = derive_attributes(hash, &book, 1, &palette);
        assert_eq!(a.dimensions, b.dimensions);
        assert_ne!(a.colour.base, b.colour.base);
    }
}
