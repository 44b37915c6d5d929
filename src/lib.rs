//! Offline music-blog build tools: library-export parsing, blog data
//! generation, and cover artwork management.

/// Placeholder artwork rendering.
pub mod art;
/// Blog data model, JSON store, and media layout.
pub mod blog;
/// Crate-wide error and result types.
pub mod error;
/// Last.fm artwork client.
pub mod lastfm;
/// Library export parsing and track extraction.
pub mod library;
/// Property-list decoding and encoding.
pub mod plist;

/// Crate error type.
pub use error::Error;
/// Crate result alias.
pub use error::Result;
