use thiserror::Error;

/// Module-local result type.
pub type Result<T> = std::result::Result<T, PlistError>;

/// Errors produced while decoding property-list values.
#[derive(Debug, Error)]
pub enum PlistError {
	/// An `integer` element's text did not parse as a whole number.
	#[error("malformed integer: {text:?}")]
	MalformedInteger {
		/// Offending text content.
		text: String,
	},
	/// Typed accessor used against a different variant.
	#[error("wrong variant: expected {expected}, got {got}")]
	WrongVariant {
		/// Variant the caller asked for.
		expected: &'static str,
		/// Variant actually present.
		got: &'static str,
	},
}
