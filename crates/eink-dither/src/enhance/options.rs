//! Enhancement options and configuration.

/// Configuration for the enhancement stages.
///
/// All factors default to `1.0` (identity) and inversion defaults to off, so
/// `EnhanceOptions::default()` leaves an image untouched.
///
/// # Example
///
/// ```
/// use eink_dither::EnhanceOptions;
///
/// let options = EnhanceOptions::new()
///     .invert(true)
///     .contrast(1.2)
///     .saturation(1.5);
///
/// assert!(options.invert);
/// assert!(!options.is_identity());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnhanceOptions {
    /// Invert all channels before any other stage.
    pub invert: bool,

    /// Brightness factor.
    ///
    /// - 0.0 = black
    /// - 1.0 = no change
    /// - 2.0 = twice as bright (clamped)
    pub brightness: f32,

    /// Contrast factor around the image's mean gray level.
    pub contrast: f32,

    /// Saturation factor.
    ///
    /// - 0.0 = grayscale
    /// - 1.0 = no change
    /// - >1.0 = exaggerated color
    pub saturation: f32,

    /// Sharpness factor.
    ///
    /// - 0.0 = smoothed
    /// - 1.0 = no change
    /// - >1.0 = edge-enhanced
    pub sharpness: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            invert: false,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            sharpness: 1.0,
        }
    }
}

impl EnhanceOptions {
    /// Create options with every stage disabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.brightness = factor;
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }

    #[inline]
    pub fn saturation(mut self, factor: f32) -> Self {
        self.saturation = factor;
        self
    }

    #[inline]
    pub fn sharpness(mut self, factor: f32) -> Self {
        self.sharpness = factor;
        self
    }

    /// True when every stage would return its input unchanged.
    pub fn is_identity(&self) -> bool {
        !self.invert
            && self.brightness == 1.0
            && self.contrast == 1.0
            && self.saturation == 1.0
            && self.sharpness == 1.0
    }
}
