//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::palette::Palette;
use crate::raster::Raster;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic error diffusion algorithm, distributing 100% of quantization
/// error to 4 neighboring pixels:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Rows are always scanned left to right, top to bottom. The panel firmware
/// does not use serpentine scanning and neither does this implementation,
/// so the output is the same pattern the panel shows.
///
/// # Example
///
/// ```
/// use eink_dither::{Dither, FloydSteinberg, Palette, Raster, Rgb};
///
/// let palette = Palette::spectra6();
/// let image = Raster::filled(4, 4, Rgb::new(250, 5, 5));
/// let indices = FloydSteinberg.dither(&image, &palette);
/// assert!(indices.iter().all(|&i| i == 4)); // red
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &Raster, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn two_tone() -> Palette {
        Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap()
    }

    #[test]
    fn test_floyd_steinberg_basic() {
        let image = Raster::filled(2, 2, Rgb::gray(128));
        let result = FloydSteinberg.dither(&image, &two_tone());

        assert_eq!(result.len(), 4);
        let black_count = result.iter().filter(|&&x| x == 0).count();
        let white_count = result.iter().filter(|&&x| x == 1).count();
        assert!(black_count > 0 && white_count > 0);
    }

    #[test]
    fn test_floyd_steinberg_first_row_by_hand() {
        // 128 -> white, error -127, right neighbor gets 7 * -127 / 16 = -55
        // 128 - 55 = 73 -> black, error 73, carried 7 * 73 / 16 = 31
        // 128 + 31 = 159 -> white
        let image = Raster::filled(3, 1, Rgb::gray(128));
        let result = FloydSteinberg.dither(&image, &two_tone());
        assert_eq!(result, vec![1, 0, 1]);
    }

    #[test]
    fn test_floyd_steinberg_full_propagation() {
        // 100% error propagation keeps average brightness close to the input
        let width = 20;
        let height = 20;
        let gray = 77u8; // ~30%
        let image = Raster::filled(width, height, Rgb::gray(gray));

        let result = FloydSteinberg.dither(&image, &two_tone());

        let white_ratio =
            result.iter().filter(|&&x| x == 1).count() as f32 / (width * height) as f32;
        let expected = gray as f32 / 255.0;
        assert!(
            (white_ratio - expected).abs() < 0.08,
            "Expected ~{} white ratio, got {}",
            expected,
            white_ratio
        );
    }

    #[test]
    fn test_floyd_steinberg_exact_black_and_white() {
        let palette = two_tone();
        let black = FloydSteinberg.dither(&Raster::filled(3, 3, Rgb::BLACK), &palette);
        assert!(black.iter().all(|&x| x == 0));
        let white = FloydSteinberg.dither(&Raster::filled(3, 3, Rgb::WHITE), &palette);
        assert!(white.iter().all(|&x| x == 1));
    }

    #[test]
    fn test_floyd_steinberg_deterministic() {
        let pixels = (0..64u32)
            .map(|i| Rgb::new((i * 4) as u8, (255 - i * 3) as u8, (i * 7 % 256) as u8))
            .collect();
        let image = Raster::new(8, 8, pixels).unwrap();
        let palette = Palette::spectra6();

        let first = FloydSteinberg.dither(&image, &palette);
        let second = FloydSteinberg.dither(&image, &palette);
        assert_eq!(first, second);
    }

    #[test]
    fn test_floyd_steinberg_empty_image() {
        let image = Raster::filled(0, 0, Rgb::BLACK);
        assert!(FloydSteinberg.dither(&image, &two_tone()).is_empty());
    }
}
