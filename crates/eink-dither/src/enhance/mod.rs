//! Image enhancement ahead of quantization.
//!
//! The panel firmware adjusts every image before it quantizes it. This
//! module reproduces those adjustments exactly, in the same order:
//!
//! 1. **Invert** (optional) - `v -> 255 - v` on every channel
//! 2. **Brightness** - blend from black toward the image
//! 3. **Contrast** - blend from a solid gray at the mean luma toward the image
//! 4. **Saturation** - blend from the per-pixel luma toward the image
//! 5. **Sharpness** - blend from a smoothed copy toward the image
//!
//! # Processing Order
//!
//! The operations do not commute. Contrast measures the mean luma of the
//! image *after* brightness, saturation works on the contrast-adjusted
//! colors, and sharpness smooths the already saturated image. Reordering any
//! of them produces a preview that no longer matches the panel.
//!
//! # Blending
//!
//! Every enhancement is a blend between a *degenerate* image and the input:
//!
//! ```text
//! out = degenerate + factor * (input - degenerate)
//! ```
//!
//! computed in single precision and truncated to 8 bits. A factor of `1.0`
//! returns the input unchanged, `0.0` returns the degenerate image, and
//! factors above `1.0` push away from it (extrapolation, clamped to 0..=255).
//!
//! # Example
//!
//! ```
//! use eink_dither::{EnhanceOptions, Enhancer, Raster, Rgb};
//!
//! let options = EnhanceOptions::new().brightness(0.5);
//! let enhancer = Enhancer::new(options);
//!
//! let input = Raster::filled(4, 4, Rgb::gray(200));
//! let output = enhancer.process(&input);
//!
//! assert_eq!(output.pixel(0, 0), Rgb::gray(100));
//! ```

mod enhancer;
mod options;
mod stages;

pub use enhancer::{Enhancer, Stage};
pub use options::EnhanceOptions;
pub use stages::{blend, brightness, contrast, invert, saturation, sharpness, smooth};
