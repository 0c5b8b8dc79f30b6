//! 8-bit RGB color type

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral gray with all channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel values widened to `i32` for error arithmetic.
    #[inline]
    pub fn to_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    /// Complement of every channel (`255 - v`).
    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// ITU-R 601-2 luma in 16.16 fixed point, rounded to nearest.
    ///
    /// ```text
    /// L = (R * 19595 + G * 38470 + B * 7471 + 0x8000) >> 16
    /// ```
    ///
    /// The weights sum to 65536, so white maps to exactly 255.
    #[inline]
    pub fn luma(self) -> u8 {
        let l = self.r as u32 * 19595 + self.g as u32 * 38470 + self.b as u32 * 7471 + 0x8000;
        (l >> 16) as u8
    }

    /// Squared Euclidean distance to `other` in 8-bit RGB space.
    #[inline]
    pub fn distance_sq(self, other: [i32; 3]) -> i32 {
        let c = self.to_i32();
        let dr = c[0] - other[0];
        let dg = c[1] - other[1];
        let db = c[2] - other[2];
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(Rgb::BLACK.luma(), 0);
        assert_eq!(Rgb::WHITE.luma(), 255);
    }

    #[test]
    fn test_luma_gray_is_identity() {
        for v in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            assert_eq!(Rgb::gray(v).luma(), v, "gray {v} should keep its level");
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 255 * 0.299 = 76.2, 255 * 0.587 = 149.7, 255 * 0.114 = 29.1
        assert_eq!(Rgb::new(255, 0, 0).luma(), 76);
        assert_eq!(Rgb::new(0, 255, 0).luma(), 150);
        assert_eq!(Rgb::new(0, 0, 255).luma(), 29);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Rgb::new(0, 128, 255).inverted(), Rgb::new(255, 127, 0));
        assert_eq!(Rgb::gray(128).inverted().inverted(), Rgb::gray(128));
    }

    #[test]
    fn test_distance_sq() {
        assert_eq!(Rgb::BLACK.distance_sq([0, 0, 0]), 0);
        assert_eq!(Rgb::BLACK.distance_sq([1, 2, 3]), 14);
        assert_eq!(Rgb::WHITE.distance_sq([255, 255, 0]), 255 * 255);
    }
}
