use serde::{Deserialize, Serialize};

/// One track extracted from the library export, shaped for the blog JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
	/// Stable track identifier from the export.
	pub id: String,
	/// Track title.
	pub name: String,
	/// Performing artist.
	pub artist: String,
	/// Album-level artist, falling back to the track artist.
	pub album_artist: String,
	/// Album title.
	pub album: String,
	/// Genre label.
	pub genre: String,
	/// Release year, when the export carries one.
	pub year: Option<i64>,
	/// Track length in milliseconds.
	pub duration: i64,
	/// Release date text, verbatim from the export.
	pub release_date: String,
	/// Composer credit.
	pub composer: String,
	/// Lifetime play count.
	pub play_count: i64,
	/// Loved/favorited flag.
	pub loved: bool,
	/// Position on the disc, when the export carries one.
	pub track_number: Option<i64>,
	/// Disc index within the album.
	pub disc_number: i64,
	/// URL slug, assigned when blog data is built.
	#[serde(default)]
	pub slug: String,
	/// Album cover media path, assigned by the media commands.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub album_cover: Option<String>,
}
