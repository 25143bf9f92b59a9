//! An owned image together with its physical resolution.
//!
//! [`Raster`] mirrors the operations of the extension traits and carries the optional
//! [`Resolution`] through every one of them, so a scanned 300 dpi page stays a 300 dpi page after
//! cropping or trimming. Resizing keeps the resolution as well: the metadata is copied, not
//! rescaled.

use crate::{
	Font, TrimOptions,
	geometry::{PointF, RectF, ToPixelRect},
	traits::{DynamicImageTraitDraw, DynamicImageTraitOperation},
};
use anyhow::{Result, ensure};
use image::{DynamicImage, Rgba};

/// Horizontal and vertical resolution in dots per inch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
	horizontal: f32,
	vertical: f32,
}

impl Resolution {
	pub fn new(horizontal: f32, vertical: f32) -> Result<Resolution> {
		ensure!(
			horizontal.is_finite() && horizontal > 0.0 && vertical.is_finite() && vertical > 0.0,
			"resolution must be positive, got {horizontal}x{vertical} dpi"
		);
		Ok(Resolution { horizontal, vertical })
	}

	/// The same resolution on both axes.
	pub fn uniform(dpi: f32) -> Result<Resolution> {
		Resolution::new(dpi, dpi)
	}

	pub fn horizontal(&self) -> f32 {
		self.horizontal
	}

	pub fn vertical(&self) -> f32 {
		self.vertical
	}
}

/// A pixel buffer with optional resolution metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
	image: DynamicImage,
	resolution: Option<Resolution>,
}

impl Raster {
	pub fn new(image: DynamicImage) -> Raster {
		Raster {
			image,
			resolution: None,
		}
	}

	pub fn with_resolution(mut self, resolution: Resolution) -> Raster {
		self.resolution = Some(resolution);
		self
	}

	pub fn image(&self) -> &DynamicImage {
		&self.image
	}

	pub fn image_mut(&mut self) -> &mut DynamicImage {
		&mut self.image
	}

	pub fn into_image(self) -> DynamicImage {
		self.image
	}

	pub fn resolution(&self) -> Option<Resolution> {
		self.resolution
	}

	pub fn width(&self) -> u32 {
		self.image.width()
	}

	pub fn height(&self) -> u32 {
		self.image.height()
	}

	fn derive(&self, image: DynamicImage) -> Raster {
		Raster {
			image,
			resolution: self.resolution,
		}
	}

	/// See [`DynamicImageTraitOperation::get_resized`].
	pub fn resize(&self, width: u32, height: u32) -> Result<Raster> {
		Ok(self.derive(self.image.get_resized(width, height)?))
	}

	/// See [`DynamicImageTraitOperation::get_cropped`].
	pub fn crop(&self, width: u32, height: u32) -> Result<Raster> {
		Ok(self.derive(self.image.get_cropped(width, height)?))
	}

	/// See [`DynamicImageTraitOperation::into_trimmed_bottom`].
	pub fn into_trimmed_bottom(self, options: &TrimOptions) -> Result<Raster> {
		let Raster { image, resolution } = self;
		Ok(Raster {
			image: image.into_trimmed_bottom(options)?,
			resolution,
		})
	}

	pub fn draw_image(&mut self, overlay: &DynamicImage, location: PointF) {
		self.image.draw_image(overlay, location);
	}

	pub fn draw_rectangles<R: ToPixelRect>(&mut self, rectangles: &[R], color: Rgba<u8>) {
		self.image.draw_rectangles(rectangles, color);
	}

	pub fn draw_text(&mut self, color: Rgba<u8>, bounds: RectF, font: &Font, text: &str) {
		self.image.draw_text(color, bounds, font, text);
	}
}

impl From<DynamicImage> for Raster {
	fn from(image: DynamicImage) -> Self {
		Raster::new(image)
	}
}
