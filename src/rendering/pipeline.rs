use eink_dither::{EinkDitherer, Palette, Raster};

use crate::error::RenderError;
use crate::models::SettingsRecord;
use crate::rendering::encode_indexed_png;

/// An encoded preview, produced fresh for each request.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Enhancement, quantization and encoding for one decoded source image.
///
/// Stateless apart from the palette; safe to share across requests.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    palette: Palette,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(Palette::spectra6())
    }
}

impl RenderPipeline {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render a decoded source under the given settings.
    ///
    /// Orientation is accepted but not applied; the panel driver rotates.
    pub fn render(
        &self,
        source: &Raster,
        settings: &SettingsRecord,
    ) -> Result<RenderedOutput, RenderError> {
        let options = settings.enhance_options();
        tracing::debug!(
            orientation = %settings.orientation,
            inverted = options.invert,
            brightness = options.brightness,
            contrast = options.contrast,
            saturation = options.saturation,
            sharpness = options.sharpness,
            "Rendering preview"
        );

        let dithered = EinkDitherer::new(self.palette.clone())
            .options(options)
            .dither(source);
        let png = encode_indexed_png(&dithered)?;

        Ok(RenderedOutput {
            png,
            width: dithered.width() as u32,
            height: dithered.height() as u32,
        })
    }
}
