mod decode;
mod encode;
mod error;
mod value;

/// Markup-tree decoding entry point.
pub use decode::decode;
/// Property-list XML rendering.
pub use encode::to_xml;
/// Error and result aliases.
pub use error::{PlistError, Result};
/// Decoded value tree types.
pub use value::{Record, Value};
