use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::art::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::error::Result;

/// Album placeholder edge length in pixels.
pub const ALBUM_SIZE: u32 = 400;
/// Artist placeholder edge length in pixels.
pub const ARTIST_SIZE: u32 = 300;

const GRADIENT_TOP: [u8; 3] = [102, 126, 234];
const GRADIENT_BOTTOM: [u8; 3] = [118, 75, 162];
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const MARGIN: u32 = 20;
const MAX_LINES: usize = 4;

/// Render a gradient placeholder with centered block-glyph text.
///
/// Output is deterministic for a given text and size. Empty text renders a
/// single question mark.
pub fn render_placeholder(text: &str, width: u32, height: u32) -> RgbImage {
	let mut img = RgbImage::new(width, height);
	fill_gradient(&mut img);
	draw_centered_text(&mut img, text);
	img
}

/// Write the image as PNG.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
	img.save_with_format(path, ImageFormat::Png)?;
	Ok(())
}

fn fill_gradient(img: &mut RgbImage) {
	let height = img.height().max(1);
	for y in 0..img.height() {
		let ratio = f64::from(y) / f64::from(height);
		let pixel = Rgb([
			lerp(GRADIENT_TOP[0], GRADIENT_BOTTOM[0], ratio),
			lerp(GRADIENT_TOP[1], GRADIENT_BOTTOM[1], ratio),
			lerp(GRADIENT_TOP[2], GRADIENT_BOTTOM[2], ratio),
		]);
		for x in 0..img.width() {
			img.put_pixel(x, y, pixel);
		}
	}
}

fn lerp(from: u8, to: u8, ratio: f64) -> u8 {
	(f64::from(from) * (1.0 - ratio) + f64::from(to) * ratio) as u8
}

fn draw_centered_text(img: &mut RgbImage, text: &str) {
	let display = if text.trim().is_empty() { "?" } else { text };
	let words: Vec<&str> = display.split_whitespace().collect();

	let usable = img.width().saturating_sub(2 * MARGIN).max(GLYPH_WIDTH);
	let advance = GLYPH_WIDTH + 1;
	let longest_word = words.iter().map(|word| word.chars().count()).max().unwrap_or(1).max(1) as u32;
	let scale = (usable / (advance * longest_word)).clamp(2, 8);
	let per_line = (usable / (advance * scale)).max(1) as usize;

	let lines = wrap_words(&words, per_line);
	let line_height = (GLYPH_HEIGHT + 2) * scale;
	let block_height = line_height * lines.len() as u32;
	let mut y = img.height().saturating_sub(block_height) / 2;

	for line in &lines {
		let line_width = advance * scale * line.chars().count() as u32;
		let x = img.width().saturating_sub(line_width) / 2;
		draw_line(img, line, x, y, scale);
		y += line_height;
	}
}

fn wrap_words(words: &[&str], per_line: usize) -> Vec<String> {
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();

	for word in words {
		if current.is_empty() {
			current = (*word).to_owned();
		} else if current.chars().count() + 1 + word.chars().count() <= per_line {
			current.push(' ');
			current.push_str(word);
		} else {
			lines.push(std::mem::take(&mut current));
			current = (*word).to_owned();
		}
		if lines.len() == MAX_LINES {
			return lines;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}

fn draw_line(img: &mut RgbImage, line: &str, origin_x: u32, origin_y: u32, scale: u32) {
	let mut x = origin_x;
	for ch in line.chars() {
		let rows = glyph(ch.to_ascii_uppercase());
		for (row, &bits) in rows.iter().enumerate() {
			for col in 0..GLYPH_WIDTH {
				if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
					continue;
				}
				fill_block(img, x + col * scale, origin_y + row as u32 * scale, scale);
			}
		}
		x += (GLYPH_WIDTH + 1) * scale;
	}
}

fn fill_block(img: &mut RgbImage, x0: u32, y0: u32, scale: u32) {
	for dy in 0..scale {
		for dx in 0..scale {
			let (x, y) = (x0 + dx, y0 + dy);
			if x < img.width() && y < img.height() {
				img.put_pixel(x, y, TEXT_COLOR);
			}
		}
	}
}
