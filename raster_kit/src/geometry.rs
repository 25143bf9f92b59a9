//! Axis-aligned rectangles and points in image coordinates.
//!
//! Rectangles come in an integer ([`RectI`]) and a floating-point ([`RectF`]) flavour. Both snap to
//! a pixel-aligned [`imageproc::rect::Rect`] through [`ToPixelRect`] before anything is drawn.

use imageproc::rect::Rect;

/// A rectangle with origin `(x, y)` (top-left) and extent `width × height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle<T> {
	pub x: T,
	pub y: T,
	pub width: T,
	pub height: T,
}

pub type RectI = Rectangle<i32>;
pub type RectF = Rectangle<f32>;

impl<T> Rectangle<T> {
	pub fn new(x: T, y: T, width: T, height: T) -> Self {
		Self { x, y, width, height }
	}
}

/// A location in floating-point image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
	pub x: f32,
	pub y: f32,
}

impl PointF {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

/// Conversion into the pixel grid used by the drawing primitives.
pub trait ToPixelRect {
	/// Returns the covered pixels, or `None` if the rectangle covers no pixel at all.
	fn to_pixel_rect(&self) -> Option<Rect>;
}

impl ToPixelRect for RectI {
	fn to_pixel_rect(&self) -> Option<Rect> {
		if self.width <= 0 || self.height <= 0 {
			return None;
		}
		Some(Rect::at(self.x, self.y).of_size(self.width as u32, self.height as u32))
	}
}

impl ToPixelRect for RectF {
	/// Edges snap to the nearest pixel boundary, so `0.4..2.6` covers pixels `0..3`.
	fn to_pixel_rect(&self) -> Option<Rect> {
		let left = self.x.round();
		let top = self.y.round();
		let right = (self.x + self.width).round();
		let bottom = (self.y + self.height).round();

		if ![left, top, right, bottom].iter().all(|v| v.is_finite()) || right <= left || bottom <= top {
			return None;
		}
		Some(Rect::at(left as i32, top as i32).of_size((right - left) as u32, (bottom - top) as u32))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn parts(r: Rect) -> (i32, i32, u32, u32) {
		(r.left(), r.top(), r.width(), r.height())
	}

	#[rstest]
	#[case::plain(RectI::new(1, 2, 3, 4), Some((1, 2, 3, 4)))]
	#[case::negative_origin(RectI::new(-5, -1, 10, 2), Some((-5, -1, 10, 2)))]
	#[case::zero_width(RectI::new(0, 0, 0, 4), None)]
	#[case::negative_height(RectI::new(0, 0, 4, -1), None)]
	fn integer_rectangles(#[case] rect: RectI, #[case] expected: Option<(i32, i32, u32, u32)>) {
		assert_eq!(rect.to_pixel_rect().map(parts), expected);
	}

	#[rstest]
	#[case::aligned(RectF::new(1.0, 2.0, 3.0, 4.0), Some((1, 2, 3, 4)))]
	#[case::snapped(RectF::new(0.4, 0.6, 2.2, 1.0), Some((0, 1, 3, 1)))]
	#[case::too_thin(RectF::new(0.6, 0.0, 0.3, 5.0), None)]
	#[case::nan(RectF::new(f32::NAN, 0.0, 3.0, 3.0), None)]
	#[case::infinite(RectF::new(0.0, 0.0, f32::INFINITY, 3.0), None)]
	fn float_rectangles(#[case] rect: RectF, #[case] expected: Option<(i32, i32, u32, u32)>) {
		assert_eq!(rect.to_pixel_rect().map(parts), expected);
	}
}
