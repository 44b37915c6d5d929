use tunepress::blog::MusicData;
use tunepress::library::{Track, slugify};

/// Slug from the data file, falling back to deriving it from the name.
pub(crate) fn slug_or(slug: &str, name: &str) -> String {
	if slug.is_empty() { slugify(name) } else { slug.to_owned() }
}

/// First `limit` characters of `text`.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
	text.chars().take(limit).collect()
}

/// Record album/artist media URLs on every entry that references them.
///
/// Albums, artists, and genres carry their own track copies, so the album
/// cover is applied to each grouped track list as well as the top list.
pub(crate) fn apply_media_paths(data: &mut MusicData, album_art: &[(String, String)], artist_art: &[(String, String)]) {
	set_album_covers(&mut data.tracks, album_art);

	for album in &mut data.albums {
		if let Some(url) = lookup(album_art, &album.name) {
			album.cover_image = Some(url.to_owned());
		}
		set_album_covers(&mut album.tracks, album_art);
	}
	for artist in &mut data.artists {
		if let Some(url) = lookup(artist_art, &artist.name) {
			artist.image = Some(url.to_owned());
		}
		set_album_covers(&mut artist.tracks, album_art);
	}
	for genre in &mut data.genres {
		set_album_covers(&mut genre.tracks, album_art);
	}
}

fn set_album_covers(tracks: &mut [Track], album_art: &[(String, String)]) {
	for track in tracks {
		if let Some(url) = lookup(album_art, &track.album) {
			track.album_cover = Some(url.to_owned());
		}
	}
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
	pairs.iter().find(|(key, _)| key == name).map(|(_, url)| url.as_str())
}
