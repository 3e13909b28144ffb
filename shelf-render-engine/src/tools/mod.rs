//! Interactive tools layered over the bookcase scene.
//!
//! There is a single tool today, arrange mode, which lets the reader drag
//! books and ornaments to new spots and remembers where they were put.
//!
//! ## Controls
//!
//! - `Tab` enters or leaves arrange mode
//! - left drag on an item moves it while arranging
//! - `Backspace` while arranging puts everything back on its packed slot

/// Drag-to-rearrange tool with persistent position overrides.
///
/// Pointer state machine, input systems and the plugin that wires them.
pub mod arrange;
