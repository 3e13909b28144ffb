/// Number of entries in the book palette.
pub const BOOK_PALETTE_SIZE: usize = 20;

/// Warm, muted spine colours as packed `0xRRGGBB` values.
/// Index lookup depends on the order, do not sort or extend.
pub const BOOK_PALETTE: [u32; BOOK_PALETTE_SIZE] = [
    0x8B9A7C, // sage green
    0xA3B18A, // light sage
    0x6B8F71, // deep sage
    0x7C9885, // muted green
    0x6B8E9F, // dusty blue
    0x5D7A8C, // steel blue
    0x8BA4B4, // soft blue
    0x4A6670, // deep teal
    0xC17F59, // terracotta
    0xB56B45, // burnt sienna
    0xA67B5B, // warm brown
    0x8B6F4E, // muted brown
    0xD4A84B, // mustard
    0xC9B267, // soft gold
    0xBFA265, // muted gold
    0xD4A88E, // blush
    0xC9A192, // dusty rose
    0xB8998C, // warm taupe
    0x9A8578, // warm neutral
    0x7A6B5E, // deep neutral
];

/// Spine label ink used on light books.
pub const LABEL_INK_DARK: u32 = 0x2A2420;

/// Spine label ink used on dark books.
pub const LABEL_INK_LIGHT: u32 = 0xF5F0E6;

/// Relative luminance above which the dark ink is chosen.
pub const LABEL_LUMINANCE_THRESHOLD: f32 = 0.45;

/// Linear multiplier for the spine face tint.
pub const SPINE_TINT: f32 = 1.08;

/// Linear multiplier for the cover/back shade.
pub const SHADE_TINT: f32 = 0.85;

/// Page block colours (top and bottom faces).
pub const PAGE_TOP_COLOUR: u32 = 0xF5F0E6;
pub const PAGE_BOTTOM_COLOUR: u32 = 0xE8E0D4;

/// Clear colour behind the bookcase. The translucent shelf is drawn over it.
pub const SCENE_BACKGROUND_COLOUR: u32 = 0x000000;
