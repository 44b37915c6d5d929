use roxmltree::Document;

use crate::error::{Error, Result};
use crate::library::track::Track;
use crate::plist::{Record, Value, decode};

/// Parse a library export document into its top-level record.
pub fn parse_library(xml: &str) -> Result<Record> {
	let doc = Document::parse(xml)?;
	let dict = doc
		.root_element()
		.children()
		.filter(|node| node.is_element())
		.find(|node| node.tag_name().name() == "dict")
		.ok_or(Error::LibraryDictMissing)?;

	match decode(dict)? {
		Value::Record(record) => Ok(record),
		_ => Err(Error::LibraryDictMissing),
	}
}

/// Extract playable tracks from the top-level library record.
///
/// Requires a `Tracks` record; entries that are not records are skipped,
/// and tracks with no recorded plays are dropped.
pub fn extract_tracks(library: &Record) -> Result<Vec<Track>> {
	let tracks = library.get("Tracks").ok_or(Error::TracksMissing)?.as_record()?;

	let mut out = Vec::new();
	for (entry_id, entry) in tracks.iter() {
		let Value::Record(data) = entry else {
			continue;
		};
		let track = track_from_record(entry_id, data)?;
		if track.play_count > 0 {
			out.push(track);
		}
	}

	Ok(out)
}

fn track_from_record(entry_id: &str, data: &Record) -> Result<Track> {
	let artist = text_or(data, "Artist", "Unknown Artist")?;
	let album_artist = match data.get("Album Artist") {
		Some(value) => value.as_text()?.to_owned(),
		None => artist.clone(),
	};
	let id = match data.get("Track ID") {
		Some(value) => value.as_integer()?.to_string(),
		None => entry_id.to_owned(),
	};
	let loved = boolean_or(data, "Loved", false)? || boolean_or(data, "Favorited", false)?;

	Ok(Track {
		id,
		name: text_or(data, "Name", "Unknown")?,
		artist,
		album_artist,
		album: text_or(data, "Album", "Unknown Album")?,
		genre: text_or(data, "Genre", "Unknown")?,
		year: optional_integer(data, "Year")?,
		duration: integer_or(data, "Total Time", 0)?,
		release_date: text_or(data, "Release Date", "")?,
		composer: text_or(data, "Composer", "")?,
		play_count: integer_or(data, "Play Count", 0)?,
		loved,
		track_number: optional_integer(data, "Track Number")?,
		disc_number: integer_or(data, "Disc Number", 1)?,
		slug: String::new(),
		album_cover: None,
	})
}

fn text_or(record: &Record, key: &str, default: &str) -> Result<String> {
	match record.get(key) {
		Some(value) => Ok(value.as_text()?.to_owned()),
		None => Ok(default.to_owned()),
	}
}

fn integer_or(record: &Record, key: &str, default: i64) -> Result<i64> {
	match record.get(key) {
		Some(value) => Ok(value.as_integer()?),
		None => Ok(default),
	}
}

fn optional_integer(record: &Record, key: &str) -> Result<Option<i64>> {
	match record.get(key) {
		Some(value) => Ok(Some(value.as_integer()?)),
		None => Ok(None),
	}
}

fn boolean_or(record: &Record, key: &str, default: bool) -> Result<bool> {
	match record.get(key) {
		Some(value) => Ok(value.as_boolean()?),
		None => Ok(default),
	}
}
