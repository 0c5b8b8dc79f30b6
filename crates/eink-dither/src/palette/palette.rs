//! Palette struct with nearest-color matching.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// Reference colors of a 6-color (Spectra 6 class) e-paper panel.
///
/// Index order is part of the contract: quantized images store indices into
/// this array and the encoded PLTE chunk lists the colors in this order.
pub const SPECTRA6: [Rgb; 6] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(255, 255, 255), // white
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 255, 0),   // yellow
];

/// An ordered set of distinct display colors.
///
/// Matching is an exact nearest match by squared Euclidean distance in 8-bit
/// RGB. Ties resolve to the lowest index.
///
/// # Example
///
/// ```
/// use eink_dither::{Palette, Rgb};
///
/// let palette = Palette::spectra6();
/// assert_eq!(palette.len(), 6);
/// assert_eq!(palette.find_nearest([250, 10, 5]), 4); // red
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from distinct colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than 256 colors
    /// - [`PaletteError::DuplicateColor`] if a color repeats
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > 256 {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The fixed 6-color panel palette ([`SPECTRA6`]).
    pub fn spectra6() -> Self {
        Self {
            colors: SPECTRA6.to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Index of the palette entry closest to `pixel`.
    ///
    /// `pixel` holds channel values in `0..=255`; they are `i32` because the
    /// dither loop builds them from accumulated error.
    pub fn find_nearest(&self, pixel: [i32; 3]) -> usize {
        let mut best_idx = 0;
        let mut best_dist = i32::MAX;
        for (idx, color) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(pixel);
            // Strict comparison: first entry wins on ties
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }
        best_idx
    }

    /// Index of `color` if it is a palette entry.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// PLTE chunk payload: `[R, G, B]` per entry in index order.
    pub fn to_plte(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::spectra6()
    }
}
