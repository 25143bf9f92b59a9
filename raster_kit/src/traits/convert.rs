//! Constructors and raw pixel access for `DynamicImage`.

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};

/// Builds images from per-pixel closures and exposes the raw bytes of 8-bit images pixel by pixel.
pub trait DynamicImageTraitConvert {
	fn from_fn_l8(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage;
	fn from_fn_la8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 2]) -> DynamicImage;
	fn from_fn_rgb8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> DynamicImage;
	fn from_fn_rgba8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> DynamicImage;

	/// An RGB image where every pixel has the same color.
	fn new_filled_rgb8(width: u32, height: u32, color: [u8; 3]) -> DynamicImage;

	/// Iterates over the pixels as byte slices of `bytes_per_pixel` bytes.
	///
	/// 16-bit and floating-point samples appear as their native-endian bytes.
	fn iter_pixels(&self) -> impl Iterator<Item = &[u8]>;
}

impl DynamicImageTraitConvert for DynamicImage {
	fn from_fn_l8(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage {
		DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, y| Luma([f(x, y)])))
	}

	fn from_fn_la8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 2]) -> DynamicImage {
		DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |x, y| LumaA(f(x, y))))
	}

	fn from_fn_rgb8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> DynamicImage {
		DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| Rgb(f(x, y))))
	}

	fn from_fn_rgba8(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> DynamicImage {
		DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| Rgba(f(x, y))))
	}

	fn new_filled_rgb8(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
		DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
	}

	fn iter_pixels(&self) -> impl Iterator<Item = &[u8]> {
		self.as_bytes().chunks_exact(usize::from(self.color().bytes_per_pixel()))
	}
}
