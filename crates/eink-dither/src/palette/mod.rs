//! Palette types and utilities
//!
//! This module provides the fixed hardware palette of 6-color panels and
//! nearest-color matching against it.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, SPECTRA6};
