//! In-place drawing on `DynamicImage`.
//!
//! All primitives go through the image's `GenericImage` view (pixel type `Rgba<u8>`), so they work
//! on every pixel format; colors are converted when a pixel is written. The target is borrowed
//! mutably only for the duration of a call.

use crate::{
	Font,
	font::text_origin,
	geometry::{PointF, RectF, RectI, ToPixelRect},
};
use image::{DynamicImage, Rgba, imageops};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};

pub trait DynamicImageTraitDraw {
	/// Composites `overlay` onto `self` with its top-left corner at `location` (rounded to whole
	/// pixels), blending by the overlay's alpha. Parts falling outside `self` are clipped.
	fn draw_image(&mut self, overlay: &DynamicImage, location: PointF);

	/// Fills every rectangle with a solid `color`. Rectangles covering no pixel are skipped.
	fn draw_rectangles<R: ToPixelRect>(&mut self, rectangles: &[R], color: Rgba<u8>);

	/// Draws a single line of anti-aliased `text`, left-aligned and vertically centered in
	/// `bounds`. Anything outside `bounds` is clipped.
	fn draw_text(&mut self, color: Rgba<u8>, bounds: RectF, font: &Font, text: &str);
}

impl DynamicImageTraitDraw for DynamicImage {
	fn draw_image(&mut self, overlay: &DynamicImage, location: PointF) {
		let x = location.x.round() as i64;
		let y = location.y.round() as i64;
		log::trace!("draw {}x{} image at ({x}, {y})", overlay.width(), overlay.height());
		imageops::overlay(self, overlay, x, y);
	}

	fn draw_rectangles<R: ToPixelRect>(&mut self, rectangles: &[R], color: Rgba<u8>) {
		for rect in rectangles.iter().filter_map(ToPixelRect::to_pixel_rect) {
			draw_filled_rect_mut(self, rect, color);
		}
	}

	fn draw_text(&mut self, color: Rgba<u8>, bounds: RectF, font: &Font, text: &str) {
		let Some(clip) = bounds
			.to_pixel_rect()
			.zip(RectI::new(0, 0, self.width() as i32, self.height() as i32).to_pixel_rect())
			.and_then(|(text, image)| text.intersect(image))
		else {
			return;
		};
		let (x, y) = text_origin(&bounds, font.line_height());
		log::trace!("draw text {text:?} at ({x}, {y}) clipped to {clip:?}");

		let mut canvas = imageops::crop(self, clip.left() as u32, clip.top() as u32, clip.width(), clip.height());
		draw_text_mut(
			&mut *canvas,
			color,
			x - clip.left(),
			y - clip.top(),
			font.scale(),
			font.face(),
			text,
		);
	}
}
