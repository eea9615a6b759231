#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! annotation-dither: palette classification for annotation masks
//!
//! Annotation masks are true-color images whose pixels should end up as one
//! of the fifteen annotation colors. This crate provides the two halves of
//! that translation:
//!
//! - **Per-pixel classification** through a precomputed 4096-entry lookup
//!   table ([`classify_argb`]), mapping a packed ARGB pixel to a 1-based
//!   palette index, or to nothing when the pixel is mostly transparent.
//! - **Whole-image dithering** ([`AnnotationDitherer`]), which reduces an
//!   ARGB raster to the annotation palette with error diffusion so that
//!   colors between palette entries are approximated by a mix of them.
//!
//! # Quick Start
//!
//! ```
//! use annotation_dither::{classify_argb, AnnotationDitherer};
//!
//! // Opaque light grey is annotation 1
//! assert_eq!(classify_argb(0xFFDD_DDDD), Some(1));
//! // Transparent pixels carry no annotation
//! assert_eq!(classify_argb(0x40DD_DDDD), None);
//!
//! let pixels = vec![0xFF80_8080u32; 16];
//! let image = AnnotationDitherer::new().dither(&pixels, 4, 4).unwrap();
//! assert_eq!(image.width(), 4);
//! assert!(image.indices().iter().all(|&i| (1..=15).contains(&i)));
//! ```
//!
//! # Index Convention
//!
//! Palette indices are 1-based throughout. Index 0 is reserved for "no
//! annotation": the lookup table never produces it, and a dithered image
//! uses it for pixels whose alpha is at or below 50%.
//!
//! # Color Distance
//!
//! Matching uses plain Euclidean distance over 8-bit sRGB channels. The
//! annotation colors are picked to be far apart, so no perceptual space is
//! needed, and keeping the dithering in the same space as the lookup table
//! means an exact palette color always classifies back to its own index.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{AnnotationDitherer, DitherError};
pub use color::{alpha, is_opaque, pack_argb, Rgb};
pub use dither::{DitherAlgorithm, DitherOptions};
pub use output::DitheredImage;
pub use palette::{
    annotation_lut, bucket_index, classify_argb, classify_rgb, Palette, ANNOTATION_COLORS,
    UNSET_INDEX,
};
