use bevy::prelude::*;
use constants::shelf_geometry::{DECOR_LEFT_X, DECOR_RIGHT_X};

use super::config::ShelfConfig;

/// Ornament placed at the end of a shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorKind {
    Plant,
    Globe,
    Vase,
    Clock,
}

impl DecorKind {
    /// Rotation used to cycle ornaments down the bookcase.
    pub const CYCLE: [DecorKind; 4] = [Self::Plant, Self::Globe, Self::Vase, Self::Clock];

    pub fn cycled(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::Globe => "globe",
            Self::Vase => "vase",
            Self::Clock => "clock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorSide {
    Left,
    Right,
}

impl DecorSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn x(self) -> f32 {
        match self {
            Self::Left => DECOR_LEFT_X,
            Self::Right => DECOR_RIGHT_X,
        }
    }
}

/// Stable persistence id, `decor-<side>-<shelf>`.
pub fn decor_id(side: DecorSide, shelf_index: usize) -> String {
    format!("decor-{}-{}", side.as_str(), shelf_index)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecorSlot {
    pub id: String,
    pub kind: DecorKind,
    pub side: DecorSide,
    pub shelf_index: usize,
    pub default_position: Vec3,
}

/// Ornaments for every shelf.
///
/// Even shelves, and any shelf holding fewer than four books, get one on the
/// right. Odd shelves, and any shelf holding fewer than three, get one on the
/// left. The left ornament is offset two places in the kind cycle so the two
/// ends of a sparse shelf differ.
pub fn decor_slots(book_count: usize, config: &ShelfConfig) -> Vec<DecorSlot> {
    let capacity = config.capacity();
    let mut slots = Vec::new();

    for shelf_index in 0..config.shelf_count(book_count) {
        let on_shelf = book_count
            .saturating_sub(shelf_index * capacity)
            .min(capacity);
        let base_y = config.shelf_y(shelf_index) + config.decor_clearance;

        let mut push = |side: DecorSide, kind: DecorKind| {
            slots.push(DecorSlot {
                id: decor_id(side, shelf_index),
                kind,
                side,
                shelf_index,
                default_position: Vec3::new(side.x(), base_y, 0.0),
            });
        };

        if shelf_index % 2 == 0 || on_shelf < 4 {
            push(DecorSide::Right, DecorKind::cycled(shelf_index));
        }
        if shelf_index % 2 == 1 || on_shelf < 3 {
            push(DecorSide::Left, DecorKind::cycled(shelf_index + 2));
        }
    }

    slots
}
