//! Palette-indexed PNG output.

use std::io::Cursor;

use eink_dither::DitheredImage;

use crate::error::RenderError;

/// Encode a dithered image as an indexed PNG with its palette in PLTE.
///
/// Writes fast and uncompressed first, then re-compresses with oxipng.
/// Color type and palette reductions stay off so the output is always
/// indexed and index `i` is always palette color `i`. If optimization fails
/// the unoptimized PNG is returned.
pub fn encode_indexed_png(image: &DitheredImage) -> Result<Vec<u8>, RenderError> {
    let palette = image.palette();
    let (bit_depth, bits) = match palette.len() {
        0 => return Err(RenderError::Unexpected("empty palette".to_string())),
        1..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        17..=256 => (png::BitDepth::Eight, 8),
        n => {
            return Err(RenderError::Unexpected(format!(
                "palette of {n} colors does not fit an indexed PNG"
            )))
        }
    };

    let width = u32::try_from(image.width())
        .map_err(|_| RenderError::Unexpected("image too wide".to_string()))?;
    let height = u32::try_from(image.height())
        .map_err(|_| RenderError::Unexpected("image too tall".to_string()))?;

    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), width, bits)
    };
    let plte = palette.to_plte();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Unexpected(format!("PNG encode error: {e}")))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| RenderError::Unexpected(format!("PNG encode error: {e}")))?;
    }
    let png_bytes = buf.into_inner();

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            color_type_reduction: false,
            grayscale_reduction: false,
            palette_reduction: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::warn!(error = %e, "PNG optimization failed, serving unoptimized output");
            Ok(png_bytes)
        }
    }
}

/// Pack palette indices into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Each row starts on a byte boundary.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use eink_dither::Palette;

    #[test]
    fn test_pack_4bit_odd_width() {
        // 3 pixels per row -> 2 bytes, low nibble of the last byte is padding
        let packed = pack_nbits(&[1, 2, 3, 4, 5, 0], 3, 4);
        assert_eq!(packed, vec![0x12, 0x30, 0x45, 0x00]);
    }

    #[test]
    fn test_pack_1bit() {
        let packed = pack_nbits(&[1, 0, 1, 1, 0, 0, 0, 0, 1], 9, 1);
        assert_eq!(packed, vec![0b1011_0000, 0b1000_0000]);
    }

    #[test]
    fn test_encode_round_trips_indices() {
        let indices = vec![0, 1, 2, 3, 4, 5, 5, 4, 3, 2, 1, 0];
        let image = DitheredImage::new(indices.clone(), 4, 3, Palette::spectra6());

        let bytes = encode_indexed_png(&image).unwrap();
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!((info.width, info.height), (4, 3));
        let plte = info.palette.as_ref().unwrap().to_vec();
        assert_eq!(plte, Palette::spectra6().to_plte());

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).unwrap();
        let bytes_per_row = frame.line_size;
        let depth = frame.bit_depth as u8;
        let mut decoded = Vec::new();
        for row in buf[..frame.buffer_size()].chunks(bytes_per_row) {
            for x in 0..4usize {
                let per_byte = 8 / depth as usize;
                let byte = row[x / per_byte];
                let shift = 8 - depth * (1 + (x % per_byte) as u8);
                decoded.push((byte >> shift) & ((1u8 << depth) - 1));
            }
        }
        assert_eq!(decoded, indices);
    }
}
