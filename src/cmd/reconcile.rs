use std::fs;
use std::path::PathBuf;

use tunepress::Result;
use tunepress::blog::{MediaKind, MediaLayout, load_music_data, save_music_data};
use tunepress::library::Track;

#[derive(clap::Args)]
pub struct Args {
	/// Music data JSON file to read and update.
	#[arg(long, default_value = "new_blog/src/data/music-data.json")]
	pub data: PathBuf,
	/// Public media directory holding the artwork.
	#[arg(long, default_value = "new_blog/public/media")]
	pub media_root: PathBuf,
}

/// Rewrite .png media references to .jpg and delete superseded placeholders.
pub fn run(args: Args) -> Result<()> {
	let Args { data: data_path, media_root } = args;

	let mut data = load_music_data(&data_path)?;
	let layout = MediaLayout::new(media_root);

	let mut updated = 0usize;

	for album in &mut data.albums {
		let Some(promoted) = promote(&layout, MediaKind::Album, album.cover_image.as_deref())? else {
			continue;
		};
		album.cover_image = Some(promoted);
		updated += 1;
		println!("JPG\t{}", album.name);
	}

	for artist in &mut data.artists {
		let Some(promoted) = promote(&layout, MediaKind::Artist, artist.image.as_deref())? else {
			continue;
		};
		artist.image = Some(promoted);
		updated += 1;
		println!("JPG\t{}", artist.name);
	}

	rewrite_track_covers(&layout, &mut data.tracks);
	for album in &mut data.albums {
		rewrite_track_covers(&layout, &mut album.tracks);
	}
	for artist in &mut data.artists {
		rewrite_track_covers(&layout, &mut artist.tracks);
	}
	for genre in &mut data.genres {
		rewrite_track_covers(&layout, &mut genre.tracks);
	}

	save_music_data(&data_path, &data)?;

	let mut cleaned = 0usize;
	for kind in [MediaKind::Album, MediaKind::Artist] {
		cleaned += sweep_superseded(&layout, kind)?;
	}

	println!("Done. updated={updated} cleaned={cleaned} data={}", data_path.display());

	Ok(())
}

/// Promoted `.jpg` URL for a `.png` reference whose `.jpg` file exists.
///
/// Deletes the superseded `.png` file as a side effect.
fn promote(layout: &MediaLayout, kind: MediaKind, url: Option<&str>) -> Result<Option<String>> {
	let Some(slug) = url.and_then(slug_of_png) else {
		return Ok(None);
	};
	if !layout.file_path(kind, slug, "jpg").exists() {
		return Ok(None);
	}

	let png_path = layout.file_path(kind, slug, "png");
	if png_path.exists() {
		fs::remove_file(&png_path)?;
		println!("DEL\t{}", png_path.display());
	}

	Ok(Some(layout.url(kind, slug, "jpg")))
}

/// Swap track album-cover references to `.jpg` where the file exists.
fn rewrite_track_covers(layout: &MediaLayout, tracks: &mut [Track]) {
	for track in tracks {
		let Some(slug) = track.album_cover.as_deref().and_then(slug_of_png) else {
			continue;
		};
		if layout.file_path(MediaKind::Album, slug, "jpg").exists() {
			track.album_cover = Some(layout.url(MediaKind::Album, slug, "jpg"));
		}
	}
}

/// Delete leftover `.png` files shadowed by a `.jpg` sibling.
fn sweep_superseded(layout: &MediaLayout, kind: MediaKind) -> Result<usize> {
	let dir = layout.dir(kind);
	let Ok(entries) = fs::read_dir(&dir) else {
		return Ok(0);
	};

	let mut cleaned = 0usize;
	for entry in entries {
		let path = entry?.path();
		let is_png = path.extension().is_some_and(|ext| ext == "png");
		if is_png && path.with_extension("jpg").exists() {
			fs::remove_file(&path)?;
			cleaned += 1;
			println!("DEL\t{}", path.display());
		}
	}

	Ok(cleaned)
}

fn slug_of_png(url: &str) -> Option<&str> {
	url.strip_suffix(".png")?.rsplit('/').next()
}

#[cfg(test)]
mod tests {
	use crate::cmd::reconcile::slug_of_png;

	#[test]
	fn slug_is_taken_from_png_references_only() {
		assert_eq!(slug_of_png("/media/albums/ok-computer.png"), Some("ok-computer"));
		assert_eq!(slug_of_png("/media/albums/ok-computer.jpg"), None);
		assert_eq!(slug_of_png("plain.png"), Some("plain"));
	}
}
