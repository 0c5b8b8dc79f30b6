//! EinkDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`EinkDitherer`] wraps enhancement and quantization behind fluent
//! configuration.

use crate::dither::{Dither, FloydSteinberg};
use crate::enhance::{EnhanceOptions, Enhancer};
use crate::output::DitheredImage;
use crate::palette::Palette;
use crate::raster::Raster;

/// High-level dithering builder for e-ink displays.
///
/// `EinkDitherer` is the recommended entry point for the crate. It wraps the
/// complete pipeline (enhancement, Floyd-Steinberg quantization, output)
/// behind a fluent builder API.
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`dither()`](Self::dither) takes `&self` so the builder is **reusable**
///   across multiple images
///
/// # Example
///
/// ```
/// use eink_dither::{EinkDitherer, Palette, Raster, Rgb};
///
/// let ditherer = EinkDitherer::new(Palette::spectra6())
///     .saturation(1.8)
///     .contrast(1.2);
///
/// let image = Raster::filled(2, 2, Rgb::gray(128));
/// let result = ditherer.dither(&image);
///
/// assert_eq!(result.width(), 2);
/// assert_eq!(result.height(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EinkDitherer {
    palette: Palette,
    enhance: EnhanceOptions,
}

impl EinkDitherer {
    /// Create a new ditherer with the given palette and no enhancement.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            enhance: EnhanceOptions::default(),
        }
    }

    /// Replace all enhancement options at once.
    #[inline]
    pub fn options(mut self, options: EnhanceOptions) -> Self {
        self.enhance = options;
        self
    }

    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.enhance.invert = enabled;
        self
    }

    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.enhance.brightness = factor;
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.enhance.contrast = factor;
        self
    }

    #[inline]
    pub fn saturation(mut self, factor: f32) -> Self {
        self.enhance.saturation = factor;
        self
    }

    #[inline]
    pub fn sharpness(mut self, factor: f32) -> Self {
        self.enhance.sharpness = factor;
        self
    }

    /// The palette indices will refer to.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run only the enhancement stages.
    pub fn enhance(&self, image: &Raster) -> Raster {
        Enhancer::new(self.enhance.clone()).process(image)
    }

    /// Enhance and quantize an image into a [`DitheredImage`].
    ///
    /// Applies the full pipeline:
    /// 1. Enhance (invert, brightness, contrast, saturation, sharpness)
    /// 2. Dither (Floyd-Steinberg against the palette)
    /// 3. Wrap in [`DitheredImage`]
    pub fn dither(&self, image: &Raster) -> DitheredImage {
        let enhanced = self.enhance(image);
        let indices = FloydSteinberg.dither(&enhanced, &self.palette);
        DitheredImage::new(
            indices,
            enhanced.width(),
            enhanced.height(),
            self.palette.clone(),
        )
    }
}
