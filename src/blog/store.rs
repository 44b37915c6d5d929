use std::fs;
use std::path::{Path, PathBuf};

use crate::blog::data::MusicData;
use crate::error::Result;

/// Read the music data JSON file.
pub fn load_music_data(path: &Path) -> Result<MusicData> {
	let text = fs::read_to_string(path)?;
	Ok(serde_json::from_str(&text)?)
}

/// Write the music data JSON file with 2-space indentation.
pub fn save_music_data(path: &Path, data: &MusicData) -> Result<()> {
	let mut text = serde_json::to_string_pretty(data)?;
	text.push('\n');
	fs::write(path, text)?;
	Ok(())
}

/// Copy `path` to a `_backup` sibling once, if no backup exists yet.
///
/// Returns the backup path when a copy was made.
pub fn backup_once(path: &Path) -> Result<Option<PathBuf>> {
	let backup = sibling_with_suffix(path, "_backup");
	if backup.exists() {
		return Ok(None);
	}
	fs::copy(path, &backup)?;
	Ok(Some(backup))
}

/// Build `<stem><suffix>.<ext>` next to `path`.
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
	let stem = path.file_stem().and_then(|item| item.to_str()).unwrap_or("music-data");
	let ext = path.extension().and_then(|item| item.to_str()).unwrap_or("json");
	path.with_file_name(format!("{stem}{suffix}.{ext}"))
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use crate::blog::sibling_with_suffix;

	#[test]
	fn suffix_lands_between_stem_and_extension() {
		let path = Path::new("data/music-data.json");
		assert_eq!(
			sibling_with_suffix(path, "_with_media"),
			Path::new("data/music-data_with_media.json")
		);
		assert_eq!(sibling_with_suffix(path, "_backup"), Path::new("data/music-data_backup.json"));
	}
}
