//! Tile-flip edge extension for the resampler.
//!
//! Convolution kernels read pixels beyond the image edges. Instead of clamping or padding with
//! transparent pixels, the image is surrounded by mirrored copies of itself (flipped at every edge,
//! repeating as often as needed). The resizer then reads the original area as a crop box out of the
//! extended buffer, so every kernel tap near an edge lands on a mirrored pixel.
//!
//! The border grows with the downscale ratio. Beyond [`MAX_MIRRORED_SCALE`] the source is first
//! box-reduced, which keeps the extended buffer close to the size of the image it wraps.

use anyhow::{Result, bail};
use image::{DynamicImage, ImageBuffer, Pixel};

/// Support radius of the Catmull-Rom kernel in source pixels at scale 1.
pub const CUBIC_SUPPORT: f64 = 2.0;

/// Maps a possibly out-of-range coordinate onto `0..len` by mirroring at every edge.
///
/// `-1` maps to `0`, `len` maps to `len - 1`, `2 * len` maps back to `0`.
pub fn tile_flip_index(i: i64, len: u32) -> u32 {
	debug_assert!(len > 0);
	let len = i64::from(len);
	let m = i.rem_euclid(2 * len);
	(if m < len { m } else { 2 * len - 1 - m }) as u32
}

/// Border width needed so the kernel never reads past the extended buffer when scaling `src` pixels
/// to `dst` pixels along one axis. Downscaling widens the kernel by the scale factor.
pub fn kernel_padding(src: u32, dst: u32) -> u32 {
	let scale = (f64::from(src) / f64::from(dst.max(1))).max(1.0);
	(CUBIC_SUPPORT * scale).ceil() as u32 + 1
}

/// Downscale ratio up to which the mirrored border is built around the unreduced source.
pub const MAX_MIRRORED_SCALE: u32 = 4;

/// Length along one axis the source is box-reduced to before the mirrored resize to `dst`.
///
/// Returns `src` unchanged unless it exceeds `dst * MAX_MIRRORED_SCALE`, in which case the
/// remaining convolution downscales by a factor of two.
pub fn prereduced_len(src: u32, dst: u32) -> u32 {
	if u64::from(src) > u64::from(dst) * u64::from(MAX_MIRRORED_SCALE) {
		dst * 2
	} else {
		src
	}
}

fn extend_buffer<P: Pixel>(
	img: &ImageBuffer<P, Vec<P::Subpixel>>,
	pad_x: u32,
	pad_y: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
	let (width, height) = img.dimensions();
	ImageBuffer::from_fn(width + 2 * pad_x, height + 2 * pad_y, |x, y| {
		*img.get_pixel(
			tile_flip_index(i64::from(x) - i64::from(pad_x), width),
			tile_flip_index(i64::from(y) - i64::from(pad_y), height),
		)
	})
}

/// Returns a copy of `image` surrounded by a mirrored border of `pad_x` columns left and right and
/// `pad_y` rows above and below. The pixel format is preserved.
///
/// The image must not be empty.
pub fn extend_tile_flip(image: &DynamicImage, pad_x: u32, pad_y: u32) -> Result<DynamicImage> {
	use DynamicImage as D;
	Ok(match image {
		D::ImageLuma8(img) => D::ImageLuma8(extend_buffer(img, pad_x, pad_y)),
		D::ImageLumaA8(img) => D::ImageLumaA8(extend_buffer(img, pad_x, pad_y)),
		D::ImageRgb8(img) => D::ImageRgb8(extend_buffer(img, pad_x, pad_y)),
		D::ImageRgba8(img) => D::ImageRgba8(extend_buffer(img, pad_x, pad_y)),
		D::ImageLuma16(img) => D::ImageLuma16(extend_buffer(img, pad_x, pad_y)),
		D::ImageLumaA16(img) => D::ImageLumaA16(extend_buffer(img, pad_x, pad_y)),
		D::ImageRgb16(img) => D::ImageRgb16(extend_buffer(img, pad_x, pad_y)),
		D::ImageRgba16(img) => D::ImageRgba16(extend_buffer(img, pad_x, pad_y)),
		D::ImageRgb32F(img) => D::ImageRgb32F(extend_buffer(img, pad_x, pad_y)),
		D::ImageRgba32F(img) => D::ImageRgba32F(extend_buffer(img, pad_x, pad_y)),
		_ => bail!("Unsupported image type for resampling: {:?}", image.color()),
	})
}
