mod parse;
mod slug;
mod track;

/// Library export parsing entry points.
pub use parse::{extract_tracks, parse_library};
/// URL slug derivation.
pub use slug::slugify;
/// Per-track blog record.
pub use track::Track;
