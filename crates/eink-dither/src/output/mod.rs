//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] stores palette indices with dimension metadata and an
//! owned [`Palette`](crate::palette::Palette). The indices
//! ([`DitheredImage::indices`]) are exactly what an indexed PNG stores.

mod dithered_image;

pub use dithered_image::DitheredImage;
