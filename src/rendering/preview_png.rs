use annotation_dither::DitheredImage;
use std::io::Cursor;
use std::path::Path;

use crate::error::RenderError;

/// Encode a dithered annotation image as a 4-bit indexed PNG.
///
/// The palette holds the unset color followed by the 15 annotation
/// colors; the tRNS chunk makes entry 0 fully transparent.
pub fn encode_preview(image: &DitheredImage) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 || width > u32::MAX as usize || height > u32::MAX as usize {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }

    let plte: Vec<u8> = image
        .color_table()
        .iter()
        .flat_map(|color| color.to_bytes())
        .collect();
    let packed = pack_nbits(image.indices(), width as u32, 4);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width as u32, height as u32);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Best);
        encoder.set_palette(plte);
        encoder.set_trns(vec![0u8]);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode and write the preview to `path`.
pub fn write_preview(image: &DitheredImage, path: &Path) -> Result<(), RenderError> {
    let png = encode_preview(image)?;
    std::fs::write(path, &png)?;
    tracing::info!(
        path = %path.display(),
        bytes = png.len(),
        annotated = image.annotated_pixels(),
        "Wrote annotation preview"
    );
    Ok(())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
pub(crate) fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
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
