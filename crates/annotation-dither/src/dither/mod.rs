//! Error diffusion dithering onto the annotation palette.
//!
//! Annotation masks are often painted with soft brushes or scaled, so their
//! colors fall between palette entries. Dithering spreads the quantization
//! error of each pixel to its unprocessed neighbors, so a region halfway
//! between two annotation colors comes out as a mix of both instead of a
//! hard edge.
//!
//! Pixels at or below 50% alpha are "unset": they get [`UNSET_INDEX`],
//! never read accumulated error and never emit any.
//!
//! # Example
//!
//! ```
//! use annotation_dither::dither::{Dither, DitherOptions, FloydSteinberg};
//! use annotation_dither::Palette;
//!
//! let palette = Palette::annotations();
//! let pixels = vec![0xFF80_8080u32; 9];
//! let indices = FloydSteinberg.dither(&pixels, 3, 3, &palette, &DitherOptions::new());
//! assert_eq!(indices.len(), 9);
//! ```
//!
//! [`UNSET_INDEX`]: crate::palette::UNSET_INDEX

mod algorithms;
mod kernel;
mod options;

pub use algorithms::{Atkinson, FloydSteinberg, Nearest, SierraLite};
pub use kernel::*;
pub use options::DitherOptions;

use crate::color::{is_opaque, Rgb};
use crate::palette::{Palette, UNSET_INDEX};

/// Dither algorithm selection for the builder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation).
    #[default]
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// Leaves flat areas cleaner at the cost of some tonal accuracy.
    Atkinson,

    /// Sierra Lite error diffusion (100% propagation, 3 neighbors).
    SierraLite,

    /// No diffusion: every pixel takes its nearest palette color.
    None,
}

impl DitherAlgorithm {
    /// The diffusion kernel, or `None` for plain nearest-color mapping.
    pub fn kernel(self) -> Option<&'static Kernel> {
        match self {
            DitherAlgorithm::FloydSteinberg => Some(&FLOYD_STEINBERG),
            DitherAlgorithm::Atkinson => Some(&ATKINSON),
            DitherAlgorithm::SierraLite => Some(&SIERRA_LITE),
            DitherAlgorithm::None => None,
        }
    }

    /// Parse an algorithm name as used in configuration files.
    ///
    /// Accepts `floyd-steinberg`, `atkinson`, `sierra-lite` and `none`,
    /// case-insensitively, with `_` accepted in place of `-`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "floyd-steinberg" => Some(DitherAlgorithm::FloydSteinberg),
            "atkinson" => Some(DitherAlgorithm::Atkinson),
            "sierra-lite" => Some(DitherAlgorithm::SierraLite),
            "none" => Some(DitherAlgorithm::None),
            _ => None,
        }
    }
}

/// Trait for palette dithering algorithms.
pub trait Dither {
    /// Dither a packed ARGB image to annotation indices.
    ///
    /// # Arguments
    ///
    /// * `image` - Input pixels as `0xAARRGGBB`, row-major order
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `palette` - Palette to quantize onto
    /// * `options` - Dithering configuration
    ///
    /// # Returns
    ///
    /// One index per pixel, row-major. Opaque pixels get `1..=palette.len()`,
    /// unset pixels get [`UNSET_INDEX`].
    ///
    /// # Panics
    ///
    /// Panics if `image` holds fewer than `width * height` pixels.
    /// [`AnnotationDitherer::dither`](crate::AnnotationDitherer::dither)
    /// checks the length and returns an error instead.
    fn dither(
        &self,
        image: &[u32],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8>;
}

/// Error buffer for efficient error diffusion.
///
/// Keeps only the rows the kernel can reach (`max_dy + 1`), rotating them
/// as the scan advances instead of allocating a full-image buffer.
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next, and so on.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer tracking `row_depth` rows.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Accumulated error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a future pixel. Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row, discarding the current one.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

#[inline]
pub(crate) fn clamp_channel(value: f32, max_error: f32) -> f32 {
    value.clamp(-max_error, 1.0 + max_error)
}

pub(crate) fn check_image_len(image: &[u32], width: usize, height: usize) {
    assert!(
        image.len() >= width * height,
        "image holds {} pixels, {}x{} needs {}",
        image.len(),
        width,
        height,
        width * height
    );
}

/// Core error diffusion loop shared by all kernels.
pub(crate) fn dither_with_kernel(
    image: &[u32],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Vec<u8> {
    check_image_len(image, width, height);
    let mut output = vec![UNSET_INDEX; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        let reverse = options.serpentine && y % 2 == 1;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let idx = y * width + x;
            let argb = image[idx];
            if !is_opaque(argb) {
                continue;
            }

            let source = Rgb::from_argb(argb).to_unit();
            let accumulated = error_buf.get_accumulated(x);
            let pixel = [
                clamp_channel(source[0] + accumulated[0], options.error_clamp),
                clamp_channel(source[1] + accumulated[1], options.error_clamp),
                clamp_channel(source[2] + accumulated[2], options.error_clamp),
            ];

            let (nearest, _) = palette.find_nearest(pixel);
            output[idx] = nearest;

            let chosen = palette.unit(nearest);
            let error = [
                pixel[0] - chosen[0],
                pixel[1] - chosen[1],
                pixel[2] - chosen[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let effective_dx = if reverse { -dx } else { dx };
                let nx = x as i32 + effective_dx;
                if nx < 0 || nx as usize >= width || y + dy as usize >= height {
                    continue;
                }
                let share = weight as f32 / divisor;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * share, error[1] * share, error[2] * share],
                );
            }
        }

        error_buf.advance_row();
    }

    output
}

/// Nearest-color mapping without diffusion.
pub(crate) fn map_nearest(
    image: &[u32],
    width: usize,
    height: usize,
    palette: &Palette,
) -> Vec<u8> {
    check_image_len(image, width, height);
    image[..width * height]
        .iter()
        .map(|&argb| {
            if is_opaque(argb) {
                palette.nearest(Rgb::from_argb(argb))
            } else {
                UNSET_INDEX
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_buffer_rotation() {
        let mut buf = ErrorBuffer::new(3, 2);
        buf.add_error(1, 1, [0.5, 0.25, 0.125]);
        assert_eq!(buf.get_accumulated(1), [0.0, 0.0, 0.0]);
        buf.advance_row();
        assert_eq!(buf.get_accumulated(1), [0.5, 0.25, 0.125]);
        buf.advance_row();
        assert_eq!(buf.get_accumulated(1), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_error_buffer_ignores_out_of_bounds() {
        let mut buf = ErrorBuffer::new(2, 2);
        buf.add_error(5, 0, [1.0; 3]);
        buf.add_error(0, 7, [1.0; 3]);
        assert_eq!(buf.get_accumulated(0), [0.0; 3]);
        assert_eq!(buf.get_accumulated(1), [0.0; 3]);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(2.0, 0.5), 1.5);
        assert_eq!(clamp_channel(-2.0, 0.5), -0.5);
        assert_eq!(clamp_channel(0.3, 0.5), 0.3);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(
            DitherAlgorithm::from_name("Floyd_Steinberg"),
            Some(DitherAlgorithm::FloydSteinberg)
        );
        assert_eq!(
            DitherAlgorithm::from_name("sierra-lite"),
            Some(DitherAlgorithm::SierraLite)
        );
        assert_eq!(DitherAlgorithm::from_name("none"), Some(DitherAlgorithm::None));
        assert_eq!(DitherAlgorithm::from_name("ordered"), None);
    }

    #[test]
    fn test_default_algorithm_has_kernel() {
        assert!(DitherAlgorithm::default().kernel().is_some());
        assert!(DitherAlgorithm::None.kernel().is_none());
    }

    #[test]
    fn test_map_nearest_marks_transparent_unset() {
        let palette = Palette::annotations();
        let indices = map_nearest(&[0xFFDD_DDDD, 0x00DD_DDDD, 0xFF19_1616], 3, 1, &palette);
        assert_eq!(indices, vec![1, UNSET_INDEX, 15]);
    }
}
