//! The annotation palette and its color lookup table
//!
//! [`Palette`] holds the fifteen annotation colors and performs exact
//! nearest-color matching. [`annotation_lut()`] caches that matching for
//! every 4-bit-quantized color so per-pixel classification is a single
//! table read.

mod lut;
mod palette;

pub use lut::{annotation_lut, bucket_index, classify_argb, classify_rgb, LUT_SIZE};
pub use palette::{Palette, ANNOTATION_COLORS, UNSET_INDEX};
