//! Extension traits on [`image::DynamicImage`].
//!
//! - [`DynamicImageTraitConvert`] builds images from closures and exposes raw pixel bytes.
//! - [`DynamicImageTraitInfo`] validates sizes and regions.
//! - [`DynamicImageTraitOperation`] resizes, crops and trims.
//! - [`DynamicImageTraitDraw`] composites images, fills rectangles and renders text in place.

mod convert;
mod draw;
mod info;
mod operation;
#[cfg(any(test, feature = "test"))]
mod test;

pub use convert::*;
pub use draw::*;
pub use info::*;
pub use operation::*;
#[cfg(any(test, feature = "test"))]
pub use test::*;
