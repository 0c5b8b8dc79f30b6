//! Error diffusion dithering.
//!
//! Quantizes a [`Raster`] to palette indices while spreading each pixel's
//! rounding error onto its unvisited neighbors, so the reduced-color image
//! keeps the tonal balance of the original.
//!
//! # Architecture
//!
//! Algorithms implement the [`Dither`] trait. The shared loop lives in
//! [`dither_with_kernel`]; an algorithm is just a [`Kernel`].
//!
//! # Integer Arithmetic
//!
//! The loop works on 8-bit channel values widened to `i32`, exactly like the
//! panel firmware. For every pixel:
//!
//! 1. `value = clamp(source + accumulated / divisor, 0, 255)` per channel,
//!    where `/` truncates toward zero
//! 2. `idx = palette.find_nearest(value)`
//! 3. `error = value - palette[idx]`
//! 4. `error * weight` is added to each kernel neighbor inside the image
//!
//! No floating point is involved, so the output is reproducible bit for bit
//! on every platform.

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;

use crate::palette::Palette;
use crate::raster::Raster;

/// Trait for error diffusion dithering algorithms.
pub trait Dither {
    /// Dither an image to palette indices.
    ///
    /// # Returns
    ///
    /// A `Vec<u8>` of palette indices, one per pixel, in row-major order.
    /// Each index is in the range `0..palette.len()`.
    fn dither(&self, image: &Raster, palette: &Palette) -> Vec<u8>;
}

/// Error buffer for efficient error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`). This avoids
/// allocating a full-image error buffer, and the buffer never outlives the
/// dither call that created it.
///
/// Values are weighted error numerators; divide by the kernel divisor when
/// reading.
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<[i32; 3]>>,
    /// Image width
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels
    /// * `row_depth` - Number of rows to track (kernel's `max_dy + 1`)
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0; 3]; width]).collect(),
            width,
        }
    }

    /// Accumulated error numerators for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [i32; 3] {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [i32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the row buffer: the first row is discarded, subsequent rows
    /// shift forward, and a new zeroed row is added at the end.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0; 3]);
        }
    }
}

/// Core error diffusion algorithm parameterized by kernel.
///
/// Scans left to right, top to bottom. Kernel contributions that would land
/// outside the image are dropped.
pub(crate) fn dither_with_kernel(image: &Raster, palette: &Palette, kernel: &Kernel) -> Vec<u8> {
    let (width, height) = (image.width(), image.height());
    let mut output = Vec::with_capacity(width * height);
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as i32;

    for y in 0..height {
        for x in 0..width {
            let source = image.pixel(x, y).to_i32();
            let accumulated = error_buf.get_accumulated(x);
            let pixel = [
                (source[0] + accumulated[0] / divisor).clamp(0, 255),
                (source[1] + accumulated[1] / divisor).clamp(0, 255),
                (source[2] + accumulated[2] / divisor).clamp(0, 255),
            ];

            let nearest_idx = palette.find_nearest(pixel);
            output.push(nearest_idx as u8);

            let nearest = palette.color(nearest_idx).to_i32();
            let error = [
                pixel[0] - nearest[0],
                pixel[1] - nearest[1],
                pixel[2] - nearest[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    let w = weight as i32;
                    error_buf.add_error(
                        nx as usize,
                        dy as usize,
                        [error[0] * w, error[1] * w, error[2] * w],
                    );
                }
            }
        }
        error_buf.advance_row();
    }

    output
}
