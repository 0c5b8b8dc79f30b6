//! Raster storage and whole-image helpers.

use crate::api::DitherError;
use crate::color::Rgb;

/// A row-major 8-bit RGB image.
///
/// # Example
///
/// ```
/// use eink_dither::{Raster, Rgb};
///
/// let raster = Raster::filled(2, 2, Rgb::gray(128));
/// assert_eq!(raster.width(), 2);
/// assert_eq!(raster.pixel(1, 1), Rgb::gray(128));
///
/// let inverted = raster.map(Rgb::inverted);
/// assert_eq!(inverted.pixel(0, 0), Rgb::gray(127));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a raster from pixels in row-major order.
    ///
    /// Fails with [`DitherError::DimensionMismatch`] if `pixels.len()` is
    /// not `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, DitherError> {
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(DitherError::DimensionMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Apply `f` to every pixel, producing a new raster of the same size.
    pub fn map(&self, f: impl Fn(Rgb) -> Rgb) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Combine two equally sized rasters pixel by pixel.
    ///
    /// `self` is passed as the first argument of `f`.
    pub(crate) fn zip_map(&self, other: &Raster, f: impl Fn(Rgb, Rgb) -> Rgb) -> Self {
        debug_assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "zip_map requires equal dimensions"
        );
        Self {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .iter()
                .zip(&other.pixels)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Mean of the luma plane, rounded half up.
    ///
    /// An empty raster has mean 0.
    pub fn mean_luma(&self) -> u8 {
        if self.pixels.is_empty() {
            return 0;
        }
        let sum: u64 = self.pixels.iter().map(|p| p.luma() as u64).sum();
        let mean = sum as f64 / self.pixels.len() as f64;
        (mean + 0.5).floor().min(255.0) as u8
    }
}
