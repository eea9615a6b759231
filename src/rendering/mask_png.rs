use annotation_dither::{pack_argb, Rgb};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::MaskError;
use crate::models::Mask;

fn decode_error(e: png::DecodingError) -> MaskError {
    match e {
        png::DecodingError::IoError(io) => MaskError::Io(io),
        other => MaskError::PngDecode(other.to_string()),
    }
}

impl Mask {
    /// Decode a PNG into a mask.
    ///
    /// Grayscale images become scalar masks whose full range is
    /// `2^bits - 1` (transparent pixels read as 0). Palette, RGB and RGBA
    /// images become color masks; 16-bit channels keep their high byte.
    pub fn from_png<R: Read>(reader: R) -> Result<Self, MaskError> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info().map_err(decode_error)?;
        let (source_color, source_depth) = {
            let info = reader.info();
            (info.color_type, info.bit_depth)
        };

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).map_err(decode_error)?;
        let data = &buf[..frame.buffer_size()];

        let wide = frame.bit_depth == png::BitDepth::Sixteen;
        let channels = frame.color_type.samples();
        let stride = channels * if wide { 2 } else { 1 };
        let pixels = frame.width as usize * frame.height as usize;
        if data.len() != pixels * stride {
            return Err(MaskError::Unsupported(format!(
                "{:?} {:?} frame of {} bytes for {} pixels",
                frame.color_type,
                frame.bit_depth,
                data.len(),
                pixels
            )));
        }
        let full = |pixel: &[u8], c: usize| -> u32 {
            if wide {
                u32::from(u16::from_be_bytes([pixel[2 * c], pixel[2 * c + 1]]))
            } else {
                u32::from(pixel[c])
            }
        };
        let byte = |pixel: &[u8], c: usize| -> u8 {
            if wide {
                pixel[2 * c]
            } else {
                pixel[c]
            }
        };

        match source_color {
            png::ColorType::Grayscale | png::ColorType::GrayscaleAlpha => {
                let bits = source_depth as u32;
                let max_value = (1u32 << bits) - 1;
                // EXPAND scales low bit depths up to 8 bits
                let scale = if bits < 8 { 255 / max_value } else { 1 };
                let samples = data
                    .chunks_exact(stride)
                    .map(|pixel| {
                        if channels == 2 && full(pixel, 1) == 0 {
                            0
                        } else {
                            full(pixel, 0) / scale
                        }
                    })
                    .collect();
                tracing::debug!(bits, max_value, "Decoded scalar mask");
                Mask::scalar(frame.width, frame.height, samples, max_value)
            }
            png::ColorType::Rgb | png::ColorType::Rgba | png::ColorType::Indexed => {
                let samples = data
                    .chunks_exact(stride)
                    .map(|pixel| {
                        let alpha = if channels == 4 { byte(pixel, 3) } else { 0xFF };
                        pack_argb(
                            alpha,
                            Rgb::new(byte(pixel, 0), byte(pixel, 1), byte(pixel, 2)),
                        )
                    })
                    .collect();
                tracing::debug!(color_type = ?source_color, "Decoded color mask");
                Mask::argb(frame.width, frame.height, samples)
            }
        }
    }

    /// Open and decode a PNG mask file.
    pub fn open(path: &Path) -> Result<Self, MaskError> {
        let file = File::open(path)?;
        let mask = Self::from_png(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            width = mask.width(),
            height = mask.height(),
            kind = %mask.kind(),
            "Loaded mask"
        );
        Ok(mask)
    }
}
