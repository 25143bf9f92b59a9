//! Color parsing utilities.
//!
//! Colors are written as hex strings in configuration files and parsed into `image` pixel types.

use anyhow::{Result, bail};
use image::{Rgb, Rgba};
use serde::{Deserialize, Deserializer};

/// Opaque white, the default background of a page.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Parses a hex color string into an RGBA color.
///
/// Supports formats:
/// - "RGB" (3 chars) -> expands to RRGGBB
/// - "RGBA" (4 chars) -> expands to RRGGBBAA
/// - "RRGGBB" (6 chars)
/// - "RRGGBBAA" (8 chars)
///
/// An optional leading `#` is stripped. Colors without alpha are opaque.
///
/// # Examples
///
/// ```
/// use raster_kit::color::parse_hex_color;
/// use image::Rgba;
///
/// assert_eq!(parse_hex_color("FF5733").unwrap(), Rgba([255, 87, 51, 255]));
/// assert_eq!(parse_hex_color("#F00").unwrap(), Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_hex_color("FF573380").unwrap(), Rgba([255, 87, 51, 128]));
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>> {
	let digits = hex.trim_start_matches('#');
	if !digits.is_ascii() {
		bail!("Invalid hex color '{digits}': only hex characters are allowed");
	}

	let nibbles = digits
		.chars()
		.map(|c| c.to_digit(16).map(|v| v as u8))
		.collect::<Option<Vec<u8>>>();
	let Some(nibbles) = nibbles else {
		bail!("Invalid hex color '{digits}': only hex characters are allowed");
	};

	let mut channels = match nibbles.len() {
		3 | 4 => nibbles.iter().map(|n| n * 17).collect::<Vec<u8>>(),
		6 | 8 => nibbles.chunks_exact(2).map(|p| p[0] * 16 + p[1]).collect::<Vec<u8>>(),
		_ => bail!("Invalid hex color '{digits}': expected 3, 4, 6, or 8 hex characters"),
	};
	if channels.len() == 3 {
		channels.push(255);
	}

	Ok(Rgba([channels[0], channels[1], channels[2], channels[3]]))
}

/// Serde helper: deserializes a hex string into an `Rgb<u8>`, dropping any alpha component.
pub fn deserialize_rgb<'de, D>(deserializer: D) -> std::result::Result<Rgb<u8>, D::Error>
where
	D: Deserializer<'de>,
{
	let hex = String::deserialize(deserializer)?;
	let color = parse_hex_color(&hex).map_err(serde::de::Error::custom)?;
	Ok(Rgb([color[0], color[1], color[2]]))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::rgb_short("F00", [255, 0, 0, 255])]
	#[case::rgb_short_green("0F0", [0, 255, 0, 255])]
	#[case::rgba_short("0F08", [0, 255, 0, 136])]
	#[case::rgb("FF5733", [255, 87, 51, 255])]
	#[case::rgb_lowercase("ff5733", [255, 87, 51, 255])]
	#[case::rgba("FF573380", [255, 87, 51, 128])]
	#[case::with_hash("#FFFFFF", [255, 255, 255, 255])]
	#[case::black("000000FF", [0, 0, 0, 255])]
	fn parses_valid_colors(#[case] hex: &str, #[case] expected: [u8; 4]) {
		assert_eq!(parse_hex_color(hex).unwrap(), Rgba(expected));
	}

	#[rstest]
	#[case::bad_digit("GG0000")]
	#[case::too_short("FF")]
	#[case::five("FFFFF")]
	#[case::nine("FF5733FF0")]
	#[case::empty("")]
	#[case::non_ascii("FFé")]
	fn rejects_invalid_colors(#[case] hex: &str) {
		assert!(parse_hex_color(hex).is_err());
	}

	#[test]
	fn white_constant_matches_parser() {
		assert_eq!(parse_hex_color("FFF").unwrap(), WHITE);
	}
}
