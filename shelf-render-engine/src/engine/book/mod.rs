//! Book records and the deterministic attributes derived from them.
//!
//! Every visual property of a book comes from a single 32-bit hash of its
//! identity string, so the same library renders identically on every run
//! without storing any per-book state.
//!
//! ```text
//! BookRecord::identity()
//!   └─> hash_identity()          (i32, wraps at 32 bits)
//!       ├─> derive_dimensions()  (height / width / depth jitter + page bonus)
//!       ├─> Palette::pick()      (slot mixes hash with library ordinal)
//!       │   └─> vary_colour()    (brightness / saturation jitter)
//!       │       └─> label_colour()
//!       └─> BookFinish::from_hash()
//! ```

/// Size, finish and colour derivation.
pub mod attributes;

/// RGB helpers, palette lookup and colour jitter.
pub mod colour;

/// Identity hash.
pub mod hash;

/// Library record type.
pub mod record;

pub use attributes::{BookAttributes, BookFinish, Dimensions, derive_attributes, derive_dimensions};
pub use colour::{ColorSpec, Palette, Rgb};
pub use hash::hash_identity;
pub use record::BookRecord;
