//! Resize, crop and bottom-trim operations for `DynamicImage`.
//!
//! This module provides [`DynamicImageTraitOperation`]:
//!
//! - Resizing to exact target dimensions with bicubic (Catmull-Rom) resampling and tile-flip edges
//! - Cropping a region anchored at the origin, as an exact copy in the source pixel format
//! - Finding the lowest row that differs from a background color and trimming below it
//!
//! Resize and crop never touch the source; they return freshly allocated images.

use super::info::DynamicImageTraitInfo;
use crate::{
	TrimOptions,
	resample::{extend_tile_flip, kernel_padding, prereduced_len},
};
use anyhow::Result;
use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, Rgb};
use raster_kit_derive::context;
use std::borrow::Cow;

/// High-level geometry operations on `DynamicImage`s.
pub trait DynamicImageTraitOperation: DynamicImageTraitInfo {
	/// Resamples the whole image into a new image of exactly `width × height`.
	///
	/// The aspect ratio is not preserved: the source is stretched to fill the target. A zero
	/// `width` or `height` yields an empty image, and an empty source yields a blank target.
	fn get_resized(&self, width: u32, height: u32) -> Result<DynamicImage>;

	/// Copies the region `(0, 0, width, height)` into a new image of the same pixel format.
	///
	/// Returns an error if the region does not fit inside the image.
	fn get_cropped(&self, width: u32, height: u32) -> Result<DynamicImage>;

	/// Scans from the bottom row upwards and returns the first row containing a pixel whose red,
	/// green or blue channel differs from `background`. Alpha is ignored.
	///
	/// Returns `None` if every pixel matches the background or the image is empty.
	fn find_content_bottom_row(&self, background: Rgb<u8>) -> Option<u32>;

	/// The height [`into_trimmed_bottom`](Self::into_trimmed_bottom) would crop to, or `None` if
	/// trimming would leave the image unchanged.
	fn trimmed_bottom_height(&self, options: &TrimOptions) -> Option<u32>;

	/// Removes background rows below the content, keeping `options.margin` rows below the content
	/// boundary row.
	///
	/// Returns `self` unchanged if no content is found or the trimmed image would not be smaller.
	fn into_trimmed_bottom(self, options: &TrimOptions) -> Result<DynamicImage>;
}

impl DynamicImageTraitOperation for DynamicImage
where
	DynamicImage: DynamicImageTraitInfo,
{
	#[context("resizing {}x{} {:?} image to {}x{}", self.width(), self.height(), self.color(), width, height)]
	fn get_resized(&self, width: u32, height: u32) -> Result<DynamicImage> {
		log::debug!("resize {}x{} -> {width}x{height}", self.width(), self.height());

		let mut dst_image = DynamicImage::new(width, height, self.color());
		if !dst_image.has_area() || !self.has_area() {
			return Ok(dst_image);
		}

		let reduced_width = prereduced_len(self.width(), width);
		let reduced_height = prereduced_len(self.height(), height);
		let source = if (reduced_width, reduced_height) == (self.width(), self.height()) {
			Cow::Borrowed(self)
		} else {
			log::trace!("box-reduce to {reduced_width}x{reduced_height} before resampling");
			let mut reduced = DynamicImage::new(reduced_width, reduced_height, self.color());
			Resizer::new().resize(
				self,
				&mut reduced,
				&ResizeOptions::default().resize_alg(ResizeAlg::Convolution(FilterType::Box)),
			)?;
			Cow::Owned(reduced)
		};

		let pad_x = kernel_padding(source.width(), width);
		let pad_y = kernel_padding(source.height(), height);
		let extended = extend_tile_flip(&source, pad_x, pad_y)?;

		let options = ResizeOptions::default()
			.resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom))
			.crop(
				f64::from(pad_x),
				f64::from(pad_y),
				f64::from(source.width()),
				f64::from(source.height()),
			);
		Resizer::new().resize(&extended, &mut dst_image, &options)?;

		Ok(dst_image)
	}

	#[context("cropping {}x{} image to {}x{}", self.width(), self.height(), width, height)]
	fn get_cropped(&self, width: u32, height: u32) -> Result<DynamicImage> {
		log::debug!("crop {}x{} -> {width}x{height}", self.width(), self.height());
		self.ensure_region_inside(width, height)?;
		Ok(self.crop_imm(0, 0, width, height))
	}

	fn find_content_bottom_row(&self, background: Rgb<u8>) -> Option<u32> {
		if !self.has_area() {
			return None;
		}

		let width = self.width() as usize;
		let [r, g, b] = background.0;
		let row = match self {
			DynamicImage::ImageLuma8(img) => {
				last_row_with(img.as_raw(), width, 1, |p| p[0] != r || p[0] != g || p[0] != b)
			}
			DynamicImage::ImageLumaA8(img) => {
				last_row_with(img.as_raw(), width, 2, |p| p[0] != r || p[0] != g || p[0] != b)
			}
			DynamicImage::ImageRgb8(img) => {
				last_row_with(img.as_raw(), width, 3, |p| p[0] != r || p[1] != g || p[2] != b)
			}
			DynamicImage::ImageRgba8(img) => {
				last_row_with(img.as_raw(), width, 4, |p| p[0] != r || p[1] != g || p[2] != b)
			}
			// 16-bit and float images are compared at 8-bit precision
			_ => {
				let rgba = self.to_rgba8();
				last_row_with(rgba.as_raw(), width, 4, |p| p[0] != r || p[1] != g || p[2] != b)
			}
		};

		log::trace!("content bottom row against {background:?}: {row:?}");
		row.map(|y| y as u32)
	}

	fn trimmed_bottom_height(&self, options: &TrimOptions) -> Option<u32> {
		let row = self.find_content_bottom_row(options.background)?;
		let proposed = u64::from(row) + u64::from(options.margin);
		(proposed < u64::from(self.height())).then_some(proposed as u32)
	}

	#[context("trimming bottom against {:?} with margin {}", options.background, options.margin)]
	fn into_trimmed_bottom(self, options: &TrimOptions) -> Result<DynamicImage> {
		match self.trimmed_bottom_height(options) {
			Some(height) => {
				log::debug!("trim bottom {}x{} -> {}x{height}", self.width(), self.height(), self.width());
				self.get_cropped(self.width(), height)
			}
			None => Ok(self),
		}
	}
}

/// Index of the last row (counted from the top) in which `is_content` holds for any pixel.
fn last_row_with(data: &[u8], width: usize, channels: usize, is_content: impl Fn(&[u8]) -> bool) -> Option<usize> {
	data.chunks_exact(width * channels)
		.rposition(|row| row.chunks_exact(channels).any(&is_content))
}
