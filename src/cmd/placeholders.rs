use std::path::PathBuf;

use tunepress::Result;
use tunepress::art::{ALBUM_SIZE, ARTIST_SIZE, render_placeholder, save_png};
use tunepress::blog::{MediaKind, MediaLayout, backup_once, load_music_data, save_music_data};

use crate::cmd::util::{apply_media_paths, slug_or, truncate_chars};

const ALBUM_TEXT_LIMIT: usize = 30;
const ARTIST_TEXT_LIMIT: usize = 15;

#[derive(clap::Args)]
pub struct Args {
	/// Music data JSON file to read and update.
	#[arg(long, default_value = "new_blog/src/data/music-data.json")]
	pub data: PathBuf,
	/// Public media directory that receives the artwork.
	#[arg(long, default_value = "new_blog/public/media")]
	pub media_root: PathBuf,
}

/// Generate placeholder artwork and record media paths in the data file.
pub fn run(args: Args) -> Result<()> {
	let Args { data: data_path, media_root } = args;

	let mut data = load_music_data(&data_path)?;
	println!("Loaded {} albums and {} artists", data.albums.len(), data.artists.len());

	let layout = MediaLayout::new(media_root);
	layout.ensure_dirs()?;

	let mut generated = 0usize;
	let mut skipped = 0usize;
	let mut album_art: Vec<(String, String)> = Vec::new();
	let mut artist_art: Vec<(String, String)> = Vec::new();

	for album in &data.albums {
		let slug = slug_or(&album.slug, &album.name);
		let path = layout.file_path(MediaKind::Album, &slug, "png");
		if path.exists() {
			skipped += 1;
			println!("SKIP\t{}", path.display());
		} else {
			let image = render_placeholder(&truncate_chars(&album.name, ALBUM_TEXT_LIMIT), ALBUM_SIZE, ALBUM_SIZE);
			save_png(&image, &path)?;
			generated += 1;
			println!("GEN\t{}", path.display());
		}
		album_art.push((album.name.clone(), layout.url(MediaKind::Album, &slug, "png")));
	}

	for artist in &data.artists {
		let slug = slug_or(&artist.slug, &artist.name);
		let path = layout.file_path(MediaKind::Artist, &slug, "png");
		if path.exists() {
			skipped += 1;
			println!("SKIP\t{}", path.display());
		} else {
			let image = render_placeholder(&truncate_chars(&artist.name, ARTIST_TEXT_LIMIT), ARTIST_SIZE, ARTIST_SIZE);
			save_png(&image, &path)?;
			generated += 1;
			println!("GEN\t{}", path.display());
		}
		artist_art.push((artist.name.clone(), layout.url(MediaKind::Artist, &slug, "png")));
	}

	apply_media_paths(&mut data, &album_art, &artist_art);

	if let Some(backup) = backup_once(&data_path)? {
		println!("BACKUP\t{}", backup.display());
	}
	save_music_data(&data_path, &data)?;
	println!("Done. generated={generated} skipped={skipped} data={}", data_path.display());

	Ok(())
}
