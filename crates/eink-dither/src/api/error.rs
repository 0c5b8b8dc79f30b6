//! Unified error type for the eink-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the eink-dither public API.
///
/// # Example
///
/// ```
/// use eink_dither::{DitherError, Palette, Rgb};
///
/// fn two_tone() -> Result<Palette, DitherError> {
///     let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE])?;
///     Ok(palette)
/// }
/// assert_eq!(two_tone().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DitherError {
    /// Palette validation error (empty, duplicate or oversized)
    Palette(PaletteError),
    /// Pixel buffer length does not match the stated dimensions
    DimensionMismatch {
        /// Length implied by width and height
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::DimensionMismatch { expected, actual } => write!(
                f,
                "pixel buffer length mismatch: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::DimensionMismatch { .. } => None,
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}
