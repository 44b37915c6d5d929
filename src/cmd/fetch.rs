use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tunepress::Result;
use tunepress::art::{ALBUM_SIZE, ARTIST_SIZE, render_placeholder, save_png};
use tunepress::blog::{MediaKind, MediaLayout, load_music_data, save_music_data, sibling_with_suffix};
use tunepress::lastfm::Client;

use crate::cmd::util::{apply_media_paths, slug_or, truncate_chars};

const ALBUM_TEXT_LIMIT: usize = 30;
const ARTIST_TEXT_LIMIT: usize = 15;

#[derive(clap::Args)]
pub struct Args {
	/// Music data JSON file to read.
	#[arg(long, default_value = "new_blog/src/data/music-data.json")]
	pub data: PathBuf,
	/// Public media directory that receives the artwork.
	#[arg(long, default_value = "new_blog/public/media")]
	pub media_root: PathBuf,
	/// Last.fm API key; falls back to the LASTFM_API_KEY environment variable.
	#[arg(long)]
	pub api_key: Option<String>,
	/// Pause between Last.fm requests, in milliseconds.
	#[arg(long, default_value_t = 200)]
	pub delay_ms: u64,
}

/// Fetch artwork from Last.fm, falling back to generated placeholders.
pub fn run(args: Args) -> Result<()> {
	let Args {
		data: data_path,
		media_root,
		api_key,
		delay_ms,
	} = args;

	let mut data = load_music_data(&data_path)?;
	println!("Loaded {} albums and {} artists", data.albums.len(), data.artists.len());

	let layout = MediaLayout::new(media_root);
	layout.ensure_dirs()?;

	let api_key = api_key.or_else(|| std::env::var("LASTFM_API_KEY").ok());
	let client = api_key.map(Client::new);
	if client.is_none() {
		println!("No API key (use --api-key or LASTFM_API_KEY); generating placeholders only.");
	}

	let mut downloaded = 0usize;
	let mut placeholders = 0usize;
	let mut skipped = 0usize;
	let mut album_art: Vec<(String, String)> = Vec::new();
	let mut artist_art: Vec<(String, String)> = Vec::new();

	for album in &data.albums {
		let slug = slug_or(&album.slug, &album.name);
		let jpg_path = layout.file_path(MediaKind::Album, &slug, "jpg");

		if jpg_path.exists() {
			skipped += 1;
			println!("SKIP\t{}", jpg_path.display());
			album_art.push((album.name.clone(), layout.url(MediaKind::Album, &slug, "jpg")));
			continue;
		}

		let fetched = client.as_ref().is_some_and(|client| {
			let lookup = client.album_cover_url(&album.artist, &album.name);
			download_cover(client, lookup, &album.name, &jpg_path)
		});
		if fetched {
			downloaded += 1;
			println!("GET\t{}", jpg_path.display());
			album_art.push((album.name.clone(), layout.url(MediaKind::Album, &slug, "jpg")));
		} else {
			let png_path = layout.file_path(MediaKind::Album, &slug, "png");
			let image = render_placeholder(&truncate_chars(&album.name, ALBUM_TEXT_LIMIT), ALBUM_SIZE, ALBUM_SIZE);
			save_png(&image, &png_path)?;
			placeholders += 1;
			println!("GEN\t{}", png_path.display());
			album_art.push((album.name.clone(), layout.url(MediaKind::Album, &slug, "png")));
		}

		if client.is_some() {
			thread::sleep(Duration::from_millis(delay_ms));
		}
	}

	for artist in &data.artists {
		let slug = slug_or(&artist.slug, &artist.name);
		let jpg_path = layout.file_path(MediaKind::Artist, &slug, "jpg");

		if jpg_path.exists() {
			skipped += 1;
			println!("SKIP\t{}", jpg_path.display());
			artist_art.push((artist.name.clone(), layout.url(MediaKind::Artist, &slug, "jpg")));
			continue;
		}

		let fetched = client.as_ref().is_some_and(|client| {
			let lookup = client.artist_image_url(&artist.name);
			download_cover(client, lookup, &artist.name, &jpg_path)
		});
		if fetched {
			downloaded += 1;
			println!("GET\t{}", jpg_path.display());
			artist_art.push((artist.name.clone(), layout.url(MediaKind::Artist, &slug, "jpg")));
		} else {
			let png_path = layout.file_path(MediaKind::Artist, &slug, "png");
			let image = render_placeholder(&truncate_chars(&artist.name, ARTIST_TEXT_LIMIT), ARTIST_SIZE, ARTIST_SIZE);
			save_png(&image, &png_path)?;
			placeholders += 1;
			println!("GEN\t{}", png_path.display());
			artist_art.push((artist.name.clone(), layout.url(MediaKind::Artist, &slug, "png")));
		}

		if client.is_some() {
			thread::sleep(Duration::from_millis(delay_ms));
		}
	}

	apply_media_paths(&mut data, &album_art, &artist_art);

	let output = sibling_with_suffix(&data_path, "_with_media");
	save_music_data(&output, &data)?;
	println!("Done. downloaded={downloaded} placeholders={placeholders} skipped={skipped} wrote={}", output.display());

	Ok(())
}

/// Resolve a lookup and download its image; lookup and download failures
/// are reported but never abort the run.
fn download_cover(client: &Client, lookup: Result<Option<String>>, name: &str, path: &Path) -> bool {
	let url = match lookup {
		Ok(Some(url)) => url,
		Ok(None) => return false,
		Err(err) => {
			eprintln!("warn: artwork lookup failed for {name}: {err}");
			return false;
		}
	};

	match client.download_image(&url, path) {
		Ok(()) => true,
		Err(err) => {
			eprintln!("warn: download failed for {name}: {err}");
			false
		}
	}
}
