//! Dithering algorithm implementations.
//!
//! Each diffusion algorithm is the shared loop in
//! [`dither_with_kernel`](super::dither_with_kernel) run with its kernel.

use crate::palette::Palette;

use super::{dither_with_kernel, map_nearest, Dither, DitherOptions};
use super::{ATKINSON, FLOYD_STEINBERG, SIERRA_LITE};

/// Floyd-Steinberg error diffusion, the default for annotation previews.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        image: &[u32],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        dither_with_kernel(image, width, height, palette, &FLOYD_STEINBERG, options)
    }
}

/// Atkinson error diffusion.
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(
        &self,
        image: &[u32],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        dither_with_kernel(image, width, height, palette, &ATKINSON, options)
    }
}

/// Sierra Lite error diffusion.
pub struct SierraLite;

impl Dither for SierraLite {
    fn dither(
        &self,
        image: &[u32],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        dither_with_kernel(image, width, height, palette, &SIERRA_LITE, options)
    }
}

/// Nearest palette color per pixel, no error diffusion.
pub struct Nearest;

impl Dither for Nearest {
    fn dither(
        &self,
        image: &[u32],
        width: usize,
        height: usize,
        palette: &Palette,
        _options: &DitherOptions,
    ) -> Vec<u8> {
        map_nearest(image, width, height, palette)
    }
}
