use serde::{Deserialize, Serialize};

use crate::library::{Track, slugify};

/// Number of genre groups kept in the blog data.
const GENRE_LIMIT: usize = 10;

/// Grouped blog data written to the music data JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicData {
	/// Top tracks ordered by play count.
	pub tracks: Vec<Track>,
	/// Albums represented in the top tracks, busiest first.
	pub albums: Vec<AlbumEntry>,
	/// Artists represented in the top tracks, busiest first.
	pub artists: Vec<ArtistEntry>,
	/// Busiest genres, capped at ten.
	pub genres: Vec<GenreEntry>,
}

/// One album group in the blog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumEntry {
	/// Album title.
	pub name: String,
	/// URL slug.
	pub slug: String,
	/// Artist credited on the album's first grouped track.
	pub artist: String,
	/// Release year of the album's first grouped track.
	pub year: Option<i64>,
	/// Grouped tracks in play-count order.
	pub tracks: Vec<Track>,
	/// Cover media path, assigned by the media commands.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cover_image: Option<String>,
}

/// One artist group in the blog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistEntry {
	/// Artist name.
	pub name: String,
	/// URL slug.
	pub slug: String,
	/// Grouped tracks in play-count order.
	pub tracks: Vec<Track>,
	/// Portrait media path, assigned by the media commands.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}

/// One genre group in the blog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreEntry {
	/// Genre label.
	pub name: String,
	/// URL slug.
	pub slug: String,
	/// Grouped tracks in play-count order.
	pub tracks: Vec<Track>,
}

/// Select the top tracks by play count and group them for the blog.
///
/// Sorting is stable throughout, so ties keep their source order. Albums and
/// artists keep every group; genres keep the ten busiest.
pub fn build_music_data(mut tracks: Vec<Track>, limit: usize) -> MusicData {
	tracks.sort_by(|left, right| right.play_count.cmp(&left.play_count));
	tracks.truncate(limit);
	for track in &mut tracks {
		track.slug = slugify(&track.name);
	}

	let mut album_groups = group_by(&tracks, |track| track.album.clone());
	let mut artist_groups = group_by(&tracks, |track| track.artist.clone());
	let mut genre_groups = group_by(&tracks, |track| track.genre.clone());

	album_groups.sort_by(|left, right| right.1.len().cmp(&left.1.len()));
	artist_groups.sort_by(|left, right| right.1.len().cmp(&left.1.len()));
	genre_groups.sort_by(|left, right| right.1.len().cmp(&left.1.len()));
	genre_groups.truncate(GENRE_LIMIT);

	MusicData {
		albums: album_groups
			.into_iter()
			.map(|(name, grouped)| AlbumEntry {
				slug: slugify(&name),
				artist: grouped.first().map(|track| track.artist.clone()).unwrap_or_else(|| "Unknown".to_owned()),
				year: grouped.first().and_then(|track| track.year),
				name,
				tracks: grouped,
				cover_image: None,
			})
			.collect(),
		artists: artist_groups
			.into_iter()
			.map(|(name, grouped)| ArtistEntry {
				slug: slugify(&name),
				name,
				tracks: grouped,
				image: None,
			})
			.collect(),
		genres: genre_groups
			.into_iter()
			.map(|(name, grouped)| GenreEntry {
				slug: slugify(&name),
				name,
				tracks: grouped,
			})
			.collect(),
		tracks,
	}
}

fn group_by(tracks: &[Track], key_of: impl Fn(&Track) -> String) -> Vec<(String, Vec<Track>)> {
	let mut groups: Vec<(String, Vec<Track>)> = Vec::new();
	for track in tracks {
		let key = key_of(track);
		match groups.iter_mut().find(|(name, _)| *name == key) {
			Some((_, items)) => items.push(track.clone()),
			None => groups.push((key, vec![track.clone()])),
		}
	}
	groups
}
