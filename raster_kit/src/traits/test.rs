use super::convert::DynamicImageTraitConvert;
use crate::Font;
use image::DynamicImage;

/// DejaVu Sans, shipped in `testdata/` for text rendering tests.
pub const TEST_FONT_DATA: &[u8] = include_bytes!("../../../testdata/DejaVuSans.ttf");

pub fn test_font(size: f32) -> Font {
	Font::from_bytes(TEST_FONT_DATA.to_vec(), size).unwrap()
}

pub trait DynamicImageTraitTest: DynamicImageTraitConvert {
	fn new_test_rgba() -> DynamicImage;
	fn new_test_rgb() -> DynamicImage;
	fn new_test_grey() -> DynamicImage;
	fn new_test_greya() -> DynamicImage;
	fn new_test_page(width: u32, height: u32, marks: &[(u32, u32)]) -> DynamicImage;
}

impl DynamicImageTraitTest for DynamicImage {
	/// 256x256 RGBA gradient
	fn new_test_rgba() -> DynamicImage {
		DynamicImage::from_fn_rgba8(256, 256, |x, y| [x as u8, (255 - x) as u8, y as u8, (255 - y) as u8])
	}

	/// 256x256 RGB gradient
	fn new_test_rgb() -> DynamicImage {
		DynamicImage::from_fn_rgb8(256, 256, |x, y| [x as u8, (255 - x) as u8, y as u8])
	}

	/// 256x256 grayscale, black on the left to white on the right.
	fn new_test_grey() -> DynamicImage {
		DynamicImage::from_fn_l8(256, 256, |x, _y| x as u8)
	}

	/// 256x256 grayscale with alpha growing from top to bottom.
	fn new_test_greya() -> DynamicImage {
		DynamicImage::from_fn_la8(256, 256, |x, y| [x as u8, y as u8])
	}

	/// A white RGB page with black pixels at the given `(x, y)` positions.
	fn new_test_page(width: u32, height: u32, marks: &[(u32, u32)]) -> DynamicImage {
		DynamicImage::from_fn_rgb8(width, height, |x, y| {
			if marks.contains(&(x, y)) { [0, 0, 0] } else { [255, 255, 255] }
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::GenericImageView;
	use rstest::rstest;

	#[rstest]
	#[case::grey(DynamicImage::new_test_grey(), ["...# +++# ####", "...# +++# ####"])]
	#[case::greya(DynamicImage::new_test_greya(), [".... +++. ###.", "...# +++# ####"])]
	#[case::rgb(DynamicImage::new_test_rgb(), [".#.# ++.# #..#", ".### ++## #.##"])]
	#[case::rgba(DynamicImage::new_test_rgba(), [".#.# ++.# #..#", ".##. ++#. #.#."])]
	fn gradients_span_the_full_range(#[case] img: DynamicImage, #[case] rows: [&str; 2]) {
		assert_eq!(img.dimensions(), (256, 256));
		let pixel = |x: u32, y: u32| {
			img.get_pixel(x, y)
				.0
				.iter()
				.map(|v| match v {
					0 => '.',
					127 | 128 => '+',
					255 => '#',
					_ => panic!("unexpected value {v}"),
				})
				.collect::<String>()
		};
		let result = [
			[pixel(0, 0), pixel(128, 0), pixel(255, 0)].join(" "),
			[pixel(0, 255), pixel(128, 255), pixel(255, 255)].join(" "),
		];
		assert_eq!(result, rows);
	}

	#[test]
	fn page_has_marks_on_white() {
		let page = DynamicImage::new_test_page(3, 2, &[(1, 1)]);
		assert_eq!(page.get_pixel(1, 1).0, [0, 0, 0, 255]);
		assert_eq!(page.get_pixel(0, 0).0, [255, 255, 255, 255]);
		assert_eq!(page.get_pixel(2, 1).0, [255, 255, 255, 255]);
	}
}
