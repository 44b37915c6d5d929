//! Minimal Last.fm client for cover artwork lookup and download.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

const API_URL: &str = "http://ws.audioscrobbler.com/2.0/";
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Last.fm API client with fixed socket timeouts.
pub struct Client {
	agent: ureq::Agent,
	api_key: String,
}

impl Client {
	/// Client bound to one API key.
	pub fn new(api_key: impl Into<String>) -> Self {
		let agent = ureq::AgentBuilder::new()
			.timeout_connect(Duration::from_secs(5))
			.timeout_read(Duration::from_secs(7))
			.build();

		Self {
			agent,
			api_key: api_key.into(),
		}
	}

	/// Largest cover image URL for one album, when Last.fm has one.
	pub fn album_cover_url(&self, artist: &str, album: &str) -> Result<Option<String>> {
		let response: AlbumInfoResponse = self.call("album.getinfo", &[("artist", artist), ("album", album)])?;
		Ok(response.album.and_then(|info| largest_image_url(info.image)))
	}

	/// Largest portrait image URL for one artist, when Last.fm has one.
	pub fn artist_image_url(&self, artist: &str) -> Result<Option<String>> {
		let response: ArtistInfoResponse = self.call("artist.getinfo", &[("artist", artist)])?;
		Ok(response.artist.and_then(|info| largest_image_url(info.image)))
	}

	/// Download an image, validating that it decodes before writing it out.
	pub fn download_image(&self, url: &str, path: &Path) -> Result<()> {
		let response = self.agent.get(url).call().map_err(|source| Error::Http {
			url: url.to_owned(),
			source: Box::new(source),
		})?;

		let mut bytes = Vec::new();
		response.into_reader().take(MAX_IMAGE_BYTES).read_to_end(&mut bytes)?;
		if image::load_from_memory(&bytes).is_err() {
			return Err(Error::UndecodableImage { url: url.to_owned() });
		}

		std::fs::write(path, bytes)?;
		Ok(())
	}

	fn call<T: for<'de> Deserialize<'de>>(&self, method: &str, params: &[(&str, &str)]) -> Result<T> {
		let mut request = self
			.agent
			.get(API_URL)
			.query("method", method)
			.query("api_key", &self.api_key)
			.query("format", "json");
		for (name, value) in params {
			request = request.query(name, value);
		}

		let response = request.call().map_err(|source| Error::Http {
			url: format!("{API_URL}?method={method}"),
			source: Box::new(source),
		})?;
		Ok(response.into_json()?)
	}
}

#[derive(Debug, Deserialize)]
struct AlbumInfoResponse {
	album: Option<AlbumInfo>,
}

#[derive(Debug, Deserialize)]
struct AlbumInfo {
	#[serde(default)]
	image: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ArtistInfoResponse {
	artist: Option<ArtistInfo>,
}

#[derive(Debug, Deserialize)]
struct ArtistInfo {
	#[serde(default)]
	image: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
	#[serde(rename = "#text", default)]
	url: String,
}

/// The API lists images smallest to largest; take the last non-empty URL.
fn largest_image_url(images: Vec<ApiImage>) -> Option<String> {
	images.into_iter().rev().map(|image| image.url).find(|url| !url.is_empty())
}
