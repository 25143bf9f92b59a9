//! Font handling and single-line text layout.

use crate::geometry::RectF;
use ab_glyph::{Font as _, FontArc, PxScale, ScaleFont};
use anyhow::{Result, ensure};
use raster_kit_derive::context;
use std::fmt;

/// A font face together with the pixel size it is rendered at.
///
/// Style (bold, italic, ...) is a property of the face, so a bold label needs a bold font file.
#[derive(Clone)]
pub struct Font {
	face: FontArc,
	size: f32,
}

impl Font {
	/// Loads a TrueType/OpenType face from `data` and renders it at `size` pixels.
	#[context("loading font at size {size}")]
	pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Font> {
		ensure!(
			size.is_finite() && size > 0.0,
			"font size must be a positive number, got {size}"
		);
		let face = FontArc::try_from_vec(data)?;
		Ok(Font { face, size })
	}

	pub fn face(&self) -> &FontArc {
		&self.face
	}

	pub fn size(&self) -> f32 {
		self.size
	}

	pub fn scale(&self) -> PxScale {
		PxScale::from(self.size)
	}

	/// Height of one line of text: ascent plus descent, without line gap.
	pub fn line_height(&self) -> f32 {
		let scaled = self.face.as_scaled(self.scale());
		scaled.ascent() - scaled.descent()
	}
}

impl fmt::Debug for Font {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Font")
			.field("glyphs", &self.face.glyph_count())
			.field("size", &self.size)
			.finish()
	}
}

/// Top-left position of a line of text that is left-aligned and vertically centered in `bounds`.
///
/// Lines taller than `bounds` overhang equally at the top and bottom.
pub fn text_origin(bounds: &RectF, line_height: f32) -> (i32, i32) {
	let x = bounds.x;
	let y = bounds.y + (bounds.height - line_height) / 2.0;
	(x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traits::{TEST_FONT_DATA, test_font};
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[test]
	fn loads_font_and_reports_size() {
		let font = test_font(20.0);
		assert_relative_eq!(font.size(), 20.0);
		assert!(font.face().glyph_count() > 0);
		// a pixel scale is the distance from descent to ascent
		assert_relative_eq!(font.line_height(), 20.0, epsilon = 0.01);
	}

	#[test]
	fn line_height_scales_with_size() {
		let small = test_font(10.0);
		let large = test_font(40.0);
		assert_relative_eq!(large.line_height(), small.line_height() * 4.0, epsilon = 0.01);
	}

	#[rstest]
	#[case::zero(0.0)]
	#[case::negative(-3.0)]
	#[case::nan(f32::NAN)]
	fn rejects_bad_sizes(#[case] size: f32) {
		let data = TEST_FONT_DATA.to_vec();
		let err = Font::from_bytes(data, size).unwrap_err();
		assert!(format!("{err:#}").contains("font size must be a positive number"));
	}

	#[test]
	fn rejects_garbage_data() {
		let err = Font::from_bytes(vec![0, 1, 2, 3], 12.0).unwrap_err();
		assert!(format!("{err:#}").contains("loading font at size 12"));
	}

	#[rstest]
	#[case::centered(RectF::new(10.0, 20.0, 100.0, 40.0), 20.0, (10, 30))]
	#[case::exact_fit(RectF::new(0.0, 0.0, 50.0, 12.0), 12.0, (0, 0))]
	#[case::taller_than_bounds(RectF::new(5.0, 10.0, 50.0, 10.0), 30.0, (5, 0))]
	#[case::fractional(RectF::new(0.6, 0.0, 10.0, 11.0), 10.0, (1, 1))]
	fn origin_is_left_aligned_and_vertically_centered(
		#[case] bounds: RectF,
		#[case] line_height: f32,
		#[case] expected: (i32, i32),
	) {
		assert_eq!(text_origin(&bounds, line_height), expected);
	}
}
