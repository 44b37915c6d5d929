mod glyph;
mod placeholder;

/// Placeholder rendering and PNG output.
pub use placeholder::{ALBUM_SIZE, ARTIST_SIZE, render_placeholder, save_png};
