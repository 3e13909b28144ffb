/// Books placed on a shelf before the packer starts the next one.
pub const BOOKS_PER_SHELF: usize = 5;

/// Minimum number of shelves rendered, even for an empty library.
pub const MIN_SHELVES: usize = 3;

/// Vertical distance between shelf boards.
pub const SHELF_SPACING: f32 = 2.9;

/// Thickness of a shelf board.
pub const SHELF_BOARD_HEIGHT: f32 = 0.15;

/// Clearance between the board centre plane and the resting surface of a book.
pub const SHELF_SURFACE_CLEARANCE: f32 = 0.08;

/// Offset from a shelf's y origin to the surface books stand on.
pub const SHELF_SURFACE_OFFSET: f32 = SHELF_BOARD_HEIGHT / 2.0 + SHELF_SURFACE_CLEARANCE;

/// Horizontal gap between adjacent packed books.
pub const BOOK_GAP: f32 = 0.03;

/// Shelf board width and depth.
pub const SHELF_BOARD_WIDTH: f32 = 8.5;
pub const SHELF_BOARD_DEPTH: f32 = 2.0;

/// Frame width between the side panels.
pub const FRAME_WIDTH: f32 = 9.0;

/// Shelf index rendered as a translucent board.
pub const INVISIBLE_SHELF_INDEX: usize = 1;

/// Base book dimensions before hash jitter.
pub const BASE_BOOK_HEIGHT: f32 = 2.0;
pub const BASE_BOOK_WIDTH: f32 = 0.32;
pub const BASE_BOOK_DEPTH: f32 = 1.5;

/// Extra height granted by page count, capped.
pub const PAGE_HEIGHT_DIVISOR: f32 = 1000.0;
pub const MAX_PAGE_HEIGHT_BONUS: f32 = 0.3;

/// Default x of the right and left decor slots.
pub const DECOR_RIGHT_X: f32 = 3.5;
pub const DECOR_LEFT_X: f32 = -3.8;

/// Uniform scale applied to decor meshes.
pub const DECOR_SCALE: f32 = 1.6;

/// Floor plane height.
pub const FLOOR_Y: f32 = -0.5;
