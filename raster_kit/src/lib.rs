//! Raster image primitives on top of [`image::DynamicImage`].
//!
//! Resizing, cropping and bottom trimming return new images; drawing mutates the target in place.
//! Everything is available as extension traits on `DynamicImage` and on the owning [`Raster`],
//! which additionally carries the image resolution.
//!
//! ```
//! use raster_kit::{DynamicImage, DynamicImageTraitConvert, DynamicImageTraitOperation, TrimOptions};
//!
//! let page = DynamicImage::from_fn_rgb8(100, 200, |x, y| {
//! 	if (x, y) == (50, 150) { [0, 0, 0] } else { [255, 255, 255] }
//! });
//! let trimmed = page.into_trimmed_bottom(&TrimOptions::default()).unwrap();
//! assert_eq!((trimmed.width(), trimmed.height()), (100, 180));
//! ```

pub mod color;
mod font;
mod geometry;
mod options;
mod raster;
mod resample;
mod traits;

pub use font::{Font, text_origin};
pub use geometry::*;
pub use image::{DynamicImage, Rgb, Rgba};
pub use options::TrimOptions;
pub use raster::*;
pub use traits::*;
