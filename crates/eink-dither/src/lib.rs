#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! eink-dither: device-faithful preview rendering for six-color e-ink panels
//!
//! This library reproduces what a Spectra 6 class panel does to an image
//! before showing it: a fixed chain of 8-bit enhancement stages followed by
//! Floyd-Steinberg quantization to the panel's six ink colors. The output is
//! a grid of palette indices that matches the panel pixel for pixel.
//!
//! # Quick Start
//!
//! The [`EinkDitherer`] builder is the primary entry point:
//!
//! ```
//! use eink_dither::{EinkDitherer, Palette, Raster, Rgb};
//!
//! let ditherer = EinkDitherer::new(Palette::spectra6())
//!     .invert(true)
//!     .contrast(1.2);
//!
//! let image = Raster::filled(4, 4, Rgb::gray(128));
//! let result = ditherer.dither(&image);
//!
//! assert_eq!(result.indices().len(), 16);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! Raster (8-bit RGB)
//!     |
//!     v
//! [Invert]                 (optional, v -> 255 - v)
//!     |
//!     v
//! [Brightness]             (blend from black)
//!     |
//!     v
//! [Contrast]               (blend from mean-luma gray)
//!     |
//!     v
//! [Saturation]             (blend from per-pixel luma)
//!     |
//!     v
//! [Sharpness]              (blend from 3x3 smoothed copy)
//!     |
//!     v
//! Floyd-Steinberg          (integer error diffusion, raster order)
//!     |
//!     v
//! DitheredImage            (palette indices + palette)
//! ```
//!
//! # Arithmetic
//!
//! Everything stays in 8-bit sRGB. There is no gamma decoding and no
//! perceptual color space: the panel firmware does neither, and a preview
//! that did would drift from the real display. Enhancement blends are
//! computed in `f32` and truncated; error diffusion is pure integer math.
//! Palette matching uses squared Euclidean RGB distance with ties going to
//! the lowest index.

pub mod api;
pub mod color;
pub mod dither;
pub mod enhance;
pub mod output;
pub mod palette;
pub mod raster;


pub use api::{DitherError, EinkDitherer};
pub use color::Rgb;
pub use dither::{Dither, FloydSteinberg};
pub use enhance::{EnhanceOptions, Enhancer, Stage};
pub use output::DitheredImage;
pub use palette::{Palette, PaletteError, SPECTRA6};
pub use raster::Raster;
