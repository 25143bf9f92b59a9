//! Configuration for bottom trimming.

use crate::color::{WHITE, deserialize_rgb};
use image::{Pixel, Rgb};
use serde::Deserialize;

/// Controls [`into_trimmed_bottom`](crate::DynamicImageTraitOperation::into_trimmed_bottom).
///
/// Defaults to a white background and a 30 pixel margin. When embedded in a configuration file
/// every field is optional and the background is written as a hex string:
///
/// ```yaml
/// background: "#F0F0F0"
/// margin: 12
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrimOptions {
	/// Color treated as empty space. Only red, green and blue are compared.
	#[serde(deserialize_with = "deserialize_rgb")]
	pub background: Rgb<u8>,
	/// Rows of background kept below the content boundary row.
	pub margin: u32,
}

impl TrimOptions {
	pub const DEFAULT_MARGIN: u32 = 30;

	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_background(mut self, background: Rgb<u8>) -> Self {
		self.background = background;
		self
	}

	pub fn with_margin(mut self, margin: u32) -> Self {
		self.margin = margin;
		self
	}
}

impl Default for TrimOptions {
	fn default() -> Self {
		Self {
			background: WHITE.to_rgb(),
			margin: Self::DEFAULT_MARGIN,
		}
	}
}
