//! Size checks for `DynamicImage`.
use super::convert::DynamicImageTraitConvert;
use anyhow::{Result, ensure};
use image::DynamicImage;

/// Geometry checks run before an operation touches any pixel.
pub trait DynamicImageTraitInfo: DynamicImageTraitConvert {
	/// Returns `true` when the image covers at least one pixel.
	fn has_area(&self) -> bool;

	/// Ensures a `width × height` region anchored at the origin lies inside the image.
	fn ensure_region_inside(&self, width: u32, height: u32) -> Result<()>;
}

impl DynamicImageTraitInfo for DynamicImage {
	fn has_area(&self) -> bool {
		self.width() > 0 && self.height() > 0
	}

	fn ensure_region_inside(&self, width: u32, height: u32) -> Result<()> {
		ensure!(
			width <= self.width() && height <= self.height(),
			"Region {}x{} exceeds image bounds {}x{}",
			width,
			height,
			self.width(),
			self.height()
		);
		Ok(())
	}
}
