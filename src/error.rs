use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building blog data and media.
#[derive(Debug, Error)]
pub enum Error {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Library export is not well-formed XML.
	#[error("xml: {0}")]
	Xml(#[from] roxmltree::Error),
	/// JSON read/write failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Property-list decode or accessor failure.
	#[error("plist: {0}")]
	Plist(#[from] crate::plist::PlistError),
	/// Image encode/decode failure.
	#[error("image: {0}")]
	Image(#[from] image::ImageError),
	/// HTTP request failure.
	#[error("http {url}: {source}")]
	Http {
		/// Requested URL.
		url: String,
		/// Underlying transport or status error.
		#[source]
		source: Box<ureq::Error>,
	},
	/// Downloaded payload did not decode as an image.
	#[error("not a decodable image: {url}")]
	UndecodableImage {
		/// Source URL of the rejected payload.
		url: String,
	},
	/// Library export has no top-level dict element.
	#[error("library export has no top-level dict")]
	LibraryDictMissing,
	/// Library record has no Tracks entry.
	#[error("library record has no Tracks entry")]
	TracksMissing,
}
