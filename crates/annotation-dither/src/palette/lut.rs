//! Color to annotation lookup table
//!
//! Each channel is quantized to its high four bits, giving 4096 buckets.
//! The table stores the nearest annotation index for the representative
//! color of every bucket (the low bits zeroed). It is built on first use
//! and never changes afterwards.

use std::sync::OnceLock;

use super::palette::Palette;
use crate::color::{is_opaque, Rgb};

/// Number of quantized color buckets.
pub const LUT_SIZE: usize = 4096;

static ANNOTATION_LUT: OnceLock<[u8; LUT_SIZE]> = OnceLock::new();

/// The process-wide color to annotation table.
///
/// The first call builds the table; concurrent first callers block until it
/// is complete, and every later call is a plain read.
pub fn annotation_lut() -> &'static [u8; LUT_SIZE] {
    ANNOTATION_LUT.get_or_init(build_lut)
}

fn build_lut() -> [u8; LUT_SIZE] {
    let palette = Palette::annotations();
    let mut lut = [0u8; LUT_SIZE];
    for (i, entry) in lut.iter_mut().enumerate() {
        let representative = Rgb::new(
            ((i & 0xf00) >> 4) as u8,
            (i & 0xf0) as u8,
            ((i & 0xf) << 4) as u8,
        );
        *entry = palette.nearest(representative);
    }
    lut
}

/// Bucket of a color: the high nibbles of R, G and B packed as `0xRGB`.
#[inline]
pub fn bucket_index(color: Rgb) -> usize {
    ((color.r as usize & 0xf0) << 4) | (color.g as usize & 0xf0) | (color.b as usize >> 4)
}

/// Annotation index for an opaque color.
#[inline]
pub fn classify_rgb(color: Rgb) -> u8 {
    annotation_lut()[bucket_index(color)]
}

/// Annotation index for a packed ARGB pixel, or `None` when the pixel is at
/// most 50% opaque.
///
/// # Example
///
/// ```
/// use annotation_dither::classify_argb;
///
/// assert_eq!(classify_argb(0xFFDD_DDDD), Some(1));
/// assert_eq!(classify_argb(0xFF19_1616), Some(15));
/// assert_eq!(classify_argb(0x7FDD_DDDD), None);
/// ```
#[inline]
pub fn classify_argb(argb: u32) -> Option<u8> {
    if is_opaque(argb) {
        Some(classify_rgb(Rgb::from_argb(argb)))
    } else {
        None
    }
}
