//! Error types for palette operations

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be used for quantization: it is empty,
/// holds the same color twice, or has more entries than a `u8` index can
/// address.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// More colors than fit in an 8-bit index
    TooManyColors {
        /// Number of colors supplied
        count: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::TooManyColors { count } => {
                write!(f, "palette has {} colors, at most 256 are supported", count)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
