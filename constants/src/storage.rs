/// Persistence namespace for book position overrides.
pub const BOOK_POSITIONS_KEY: &str = "book-positions";

/// Persistence namespace for decor position overrides.
pub const DECOR_POSITIONS_KEY: &str = "decor-positions";

/// Environment variable overriding the native save directory.
pub const DATA_DIR_ENV: &str = "SHELF_DATA_DIR";

/// Save directory used when `DATA_DIR_ENV` is unset.
pub const DEFAULT_DATA_DIR: &str = "shelf_data";

/// Library asset, relative to the bevy asset folder.
pub const LIBRARY_ASSET_PATH: &str = "library.json";
