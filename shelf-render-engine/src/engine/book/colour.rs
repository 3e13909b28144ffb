use bevy::prelude::*;
use constants::palette::{BOOK_PALETTE, SHADE_TINT, SPINE_TINT};

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` value.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness in `[0, 1]` (BT.601 weights on the sRGB bytes).
    pub fn luminance(self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.r, self.g, self.b)
    }

    /// Scale in linear space without clamping, the way a renderer multiplies
    /// a material colour.
    pub fn tinted(self, factor: f32) -> Color {
        let linear = self.to_color().to_linear();
        Color::LinearRgba(LinearRgba::rgb(
            linear.red * factor,
            linear.green * factor,
            linear.blue * factor,
        ))
    }
}

/// Ordered set of base spine colours. Injected through `ShelfConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    /// Returns `None` for an empty table.
    pub fn new(entries: Vec<Rgb>) -> Option<Self> {
        (!entries.is_empty()).then_some(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    /// `abs(hash * 31 + ordinal * 17) mod len`, evaluated in 64 bits so the
    /// product never wraps.
    pub fn index_for(&self, hash: i32, ordinal: usize) -> usize {
        let mixed = hash as i64 * 31 + ordinal as i64 * 17;
        (mixed.unsigned_abs() % self.entries.len() as u64) as usize
    }

    pub fn pick(&self, hash: i32, ordinal: usize) -> Rgb {
        self.entries[self.index_for(hash, ordinal)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: BOOK_PALETTE.iter().map(|&packed| Rgb::from_packed(packed)).collect(),
        }
    }
}

/// Colours derived for one book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec {
    /// Palette entry before jitter.
    pub base: Rgb,
    /// Base colour after brightness and saturation jitter.
    pub varied: Rgb,
    /// Ink for spine text, chosen for contrast against `varied`.
    pub label: Rgb,
}

impl ColorSpec {
    pub fn spine(&self) -> Color {
        self.varied.tinted(SPINE_TINT)
    }

    pub fn shade(&self) -> Color {
        self.varied.tinted(SHADE_TINT)
    }
}

/// Jitter a base colour by the hash: brightness `(hash mod 21) - 10`,
/// saturation `0.9 + ((hash >> 4) mod 20) / 100` around the channel mean.
pub fn vary_colour(base: Rgb, hash: i32) -> Rgb {
    let brightness_shift = ((hash % 21) - 10) as f64;
    let saturation = 0.9 + ((hash >> 4) % 20) as f64 / 100.0;
    let mean = (base.r as f64 + base.g as f64 + base.b as f64) / 3.0;

    let channel = |value: u8| -> u8 {
        let shifted = (value as f64 - mean) * saturation + mean + brightness_shift;
        // Half rounds toward positive infinity.
        (shifted + 0.5).floor().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(base.r), channel(base.g), channel(base.b))
}

/// Dark ink on light spines, light ink on dark ones.
pub fn label_colour(background: Rgb, threshold: f32, dark: Rgb, light: Rgb) -> Rgb {
    if background.luminance() > threshold { dark } else { light }
}
