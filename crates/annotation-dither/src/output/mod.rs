//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] stores annotation indices with dimension metadata and
//! offers the color table and an ARGB rendering for preview.

mod dithered_image;

pub use dithered_image::DitheredImage;
