#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[test]
fn fixture_library_produces_ordered_blog_data() {
	let out_dir = scratch_dir("tracks-full");
	let output = out_dir.join("music-data.json");
	let json = run_tracks(&output, &["--limit", "200"]);

	let names: Vec<&str> = json["tracks"]
		.as_array()
		.expect("tracks is an array")
		.iter()
		.map(|track| track["name"].as_str().expect("track name"))
		.collect();
	assert_eq!(names, ["Heroes", "Paranoid Android", "Karma Police", "Svefn-g-englar"]);

	let first = &json["tracks"][0];
	assert_eq!(first["playCount"], 51);
	assert_eq!(first["loved"], true, "Favorited should count as loved");
	assert_eq!(first["albumArtist"], "David Bowie");
	assert_eq!(first["slug"], "heroes");

	let second = &json["tracks"][1];
	assert_eq!(second["albumArtist"], "Radiohead", "album artist should fall back to artist");
	assert_eq!(second["releaseDate"], "1997-05-21T07:00:00Z");

	let albums = json["albums"].as_array().expect("albums is an array");
	assert_eq!(albums[0]["name"], "OK Computer", "busiest album should lead");
	assert_eq!(albums[0]["tracks"].as_array().expect("album tracks").len(), 2);
	assert_eq!(albums[0]["slug"], "ok-computer");
	assert_eq!(albums[0]["year"], 1997);

	let heroes_album = albums
		.iter()
		.find(|album| album["name"] == "\"Heroes\"")
		.expect("quoted album name survives");
	assert_eq!(heroes_album["slug"], "heroes");

	let genres = json["genres"].as_array().expect("genres is an array");
	assert_eq!(genres[0]["name"], "Alternative");
}

#[test]
fn track_limit_is_honored() {
	let out_dir = scratch_dir("tracks-limited");
	let output = out_dir.join("music-data.json");
	let json = run_tracks(&output, &["--limit", "2"]);

	let tracks = json["tracks"].as_array().expect("tracks is an array");
	assert_eq!(tracks.len(), 2);
	assert_eq!(tracks[0]["name"], "Heroes");
	assert_eq!(tracks[1]["name"], "Paranoid Android");
}

#[test]
fn zero_play_count_tracks_never_appear() {
	let out_dir = scratch_dir("tracks-zero");
	let output = out_dir.join("music-data.json");
	let json = run_tracks(&output, &[]);

	let names: Vec<&str> = json["tracks"]
		.as_array()
		.expect("tracks is an array")
		.iter()
		.map(|track| track["name"].as_str().expect("track name"))
		.collect();
	assert!(!names.contains(&"Skipped Song"));
}

fn run_tracks(output: &Path, extra: &[&str]) -> serde_json::Value {
	let library = fixture_path("Library.xml");
	let status = Command::new(env!("CARGO_BIN_EXE_tunepress"))
		.arg("tracks")
		.arg("--library")
		.arg(&library)
		.arg("--output")
		.arg(output)
		.args(extra)
		.output()
		.expect("tunepress command executes");
	assert!(
		status.status.success(),
		"tracks command failed: {}",
		String::from_utf8_lossy(&status.stderr)
	);

	let text = fs::read_to_string(output).expect("output file exists");
	serde_json::from_str(&text).expect("output is valid json")
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn scratch_dir(name: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("tunepress-{}-{name}", std::process::id()));
	if dir.exists() {
		fs::remove_dir_all(&dir).expect("stale scratch dir removes");
	}
	fs::create_dir_all(&dir).expect("scratch dir creates");
	dir
}
