//! The individual enhancement operations.
//!
//! Each function borrows a raster and returns a new one. None of them keep
//! state between calls.

use crate::color::Rgb;
use crate::raster::Raster;

/// Smoothing kernel weights, row-major 3x3.
const SMOOTH_KERNEL: [u32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];
const SMOOTH_SCALE: u32 = 13;

/// Blend one channel from `degenerate` toward `source`.
///
/// Single-precision interpolation, then clamp and truncate.
#[inline]
pub(crate) fn blend_channel(degenerate: u8, source: u8, factor: f32) -> u8 {
    let d = degenerate as f32;
    let t = d + factor * (source as f32 - d);
    if t <= 0.0 {
        0
    } else if t >= 255.0 {
        255
    } else {
        t as u8
    }
}

#[inline]
fn blend_pixel(degenerate: Rgb, source: Rgb, factor: f32) -> Rgb {
    Rgb::new(
        blend_channel(degenerate.r, source.r, factor),
        blend_channel(degenerate.g, source.g, factor),
        blend_channel(degenerate.b, source.b, factor),
    )
}

/// Blend `degenerate` toward `source` by `factor`.
///
/// Both rasters must have the same dimensions.
pub fn blend(degenerate: &Raster, source: &Raster, factor: f32) -> Raster {
    degenerate.zip_map(source, |d, s| blend_pixel(d, s, factor))
}

/// Complement every channel.
pub fn invert(source: &Raster) -> Raster {
    source.map(Rgb::inverted)
}

/// Blend from black toward `source`.
pub fn brightness(source: &Raster, factor: f32) -> Raster {
    source.map(|p| blend_pixel(Rgb::BLACK, p, factor))
}

/// Blend from a solid gray at the mean luma toward `source`.
pub fn contrast(source: &Raster, factor: f32) -> Raster {
    let mean = Rgb::gray(source.mean_luma());
    source.map(|p| blend_pixel(mean, p, factor))
}

/// Blend from each pixel's own luma toward its color.
pub fn saturation(source: &Raster, factor: f32) -> Raster {
    source.map(|p| blend_pixel(Rgb::gray(p.luma()), p, factor))
}

/// Blend from a smoothed copy toward `source`.
pub fn sharpness(source: &Raster, factor: f32) -> Raster {
    let smoothed = smooth(source);
    blend(&smoothed, source, factor)
}

/// 3x3 weighted smoothing filter.
///
/// The border rows and columns are copied unchanged, and rasters smaller
/// than the kernel come back as-is.
pub fn smooth(source: &Raster) -> Raster {
    let (width, height) = (source.width(), source.height());
    if width < 3 || height < 3 {
        return source.clone();
    }

    let src = source.pixels();
    let mut out = src.to_vec();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc = [0u32; 3];
            for ky in 0..3 {
                for kx in 0..3 {
                    let p = src[(y + ky - 1) * width + (x + kx - 1)];
                    let w = SMOOTH_KERNEL[ky * 3 + kx];
                    acc[0] += p.r as u32 * w;
                    acc[1] += p.g as u32 * w;
                    acc[2] += p.b as u32 * w;
                }
            }
            // Scale is odd, so (acc + 6) / 13 rounds to nearest with no ties
            let half = SMOOTH_SCALE / 2;
            out[y * width + x] = Rgb::new(
                ((acc[0] + half) / SMOOTH_SCALE) as u8,
                ((acc[1] + half) / SMOOTH_SCALE) as u8,
                ((acc[2] + half) / SMOOTH_SCALE) as u8,
            );
        }
    }

    // Length is unchanged, so this cannot fail
    Raster::new(width, height, out).unwrap_or_else(|_| source.clone())
}
