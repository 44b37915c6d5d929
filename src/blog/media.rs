use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Media kind, mapping to a subdirectory and public URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
	/// Album cover artwork.
	Album,
	/// Artist portrait artwork.
	Artist,
}

impl MediaKind {
	/// Directory and URL segment for this kind.
	pub fn segment(self) -> &'static str {
		match self {
			MediaKind::Album => "albums",
			MediaKind::Artist => "artists",
		}
	}
}

/// Filesystem and URL layout of the blog's public media directory.
#[derive(Debug, Clone)]
pub struct MediaLayout {
	root: PathBuf,
}

impl MediaLayout {
	/// Layout rooted at the blog's public media directory.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Directory that holds files of one kind.
	pub fn dir(&self, kind: MediaKind) -> PathBuf {
		self.root.join(kind.segment())
	}

	/// File path for one slug and extension.
	pub fn file_path(&self, kind: MediaKind, slug: &str, ext: &str) -> PathBuf {
		self.dir(kind).join(format!("{slug}.{ext}"))
	}

	/// Public URL the blog serves the file under.
	pub fn url(&self, kind: MediaKind, slug: &str, ext: &str) -> String {
		format!("/media/{}/{slug}.{ext}", kind.segment())
	}

	/// Create both media subdirectories.
	pub fn ensure_dirs(&self) -> Result<()> {
		fs::create_dir_all(self.dir(MediaKind::Album))?;
		fs::create_dir_all(self.dir(MediaKind::Artist))?;
		Ok(())
	}
}
