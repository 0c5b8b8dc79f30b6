//! Color types
//!
//! Everything in this crate works on 8-bit sRGB triples, the same
//! representation the panel firmware's imaging library uses. Keeping the
//! arithmetic in integer 8-bit space is what makes the preview match the
//! device pixel for pixel.
//!
//! # Example
//!
//! ```
//! use eink_dither::Rgb;
//!
//! let orange = Rgb::new(255, 128, 0);
//! assert_eq!(orange.to_bytes(), [255, 128, 0]);
//! assert_eq!(orange.luma(), 151);
//! ```

mod rgb;

pub use rgb::Rgb;
