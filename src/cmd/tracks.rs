use std::fs;
use std::path::PathBuf;

use tunepress::Result;
use tunepress::blog::{build_music_data, save_music_data};
use tunepress::library::{extract_tracks, parse_library};

#[derive(clap::Args)]
pub struct Args {
	/// Library export to read.
	#[arg(long, default_value = "Library.xml")]
	pub library: PathBuf,
	/// Music data JSON file to write.
	#[arg(long, default_value = "new_blog/src/data/music-data.json")]
	pub output: PathBuf,
	/// Number of top tracks to keep.
	#[arg(long, default_value_t = 200)]
	pub limit: usize,
}

/// Extract play-count data from the library export into blog JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { library, output, limit } = args;

	println!("Parsing {}...", library.display());
	let xml = fs::read_to_string(&library)?;
	let record = parse_library(&xml)?;
	let tracks = extract_tracks(&record)?;
	println!("Found {} tracks with play count > 0", tracks.len());

	let data = build_music_data(tracks, limit);
	println!("tracks: {}", data.tracks.len());
	println!("albums: {}", data.albums.len());
	println!("artists: {}", data.artists.len());
	println!("genres: {}", data.genres.len());

	if let Some(parent) = output.parent() {
		fs::create_dir_all(parent)?;
	}
	save_music_data(&output, &data)?;
	println!("Done. wrote={}", output.display());

	Ok(())
}
