//! AnnotationDitherer builder, the entry point for whole-image dithering.

use crate::dither::{
    Atkinson, Dither, DitherAlgorithm, DitherOptions, FloydSteinberg, Nearest, SierraLite,
};
use crate::output::DitheredImage;
use crate::palette::Palette;

use super::DitherError;

/// Reduces a packed ARGB raster to the annotation palette.
///
/// Configuration methods consume and return `self`; [`dither()`](Self::dither)
/// takes `&self` so one builder can process many images.
///
/// # Example
///
/// ```
/// use annotation_dither::{AnnotationDitherer, DitherAlgorithm};
///
/// let ditherer = AnnotationDitherer::new()
///     .algorithm(DitherAlgorithm::Atkinson)
///     .serpentine(false);
///
/// let pixels = vec![0xFFDD_DDDDu32; 6];
/// let image = ditherer.dither(&pixels, 3, 2).unwrap();
/// assert!(image.indices().iter().all(|&i| i == 1));
/// ```
#[derive(Debug, Clone)]
pub struct AnnotationDitherer {
    palette: Palette,
    options: DitherOptions,
    algorithm: DitherAlgorithm,
}

impl AnnotationDitherer {
    /// Floyd-Steinberg over the annotation palette with default options.
    pub fn new() -> Self {
        Self {
            palette: Palette::annotations(),
            options: DitherOptions::new(),
            algorithm: DitherAlgorithm::default(),
        }
    }

    /// Set the dithering algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.options = self.options.serpentine(enabled);
        self
    }

    /// Set the accumulated error clamp.
    #[inline]
    pub fn error_clamp(mut self, clamp: f32) -> Self {
        self.options = self.options.error_clamp(clamp);
        self
    }

    /// Dither `width * height` packed ARGB pixels into a [`DitheredImage`]
    /// of the same size.
    ///
    /// # Errors
    ///
    /// [`DitherError::DimensionMismatch`] if `pixels` has the wrong length.
    pub fn dither(
        &self,
        pixels: &[u32],
        width: usize,
        height: usize,
    ) -> Result<DitheredImage, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let ditherer: &dyn Dither = match self.algorithm {
            DitherAlgorithm::FloydSteinberg => &FloydSteinberg,
            DitherAlgorithm::Atkinson => &Atkinson,
            DitherAlgorithm::SierraLite => &SierraLite,
            DitherAlgorithm::None => &Nearest,
        };
        let indices = ditherer.dither(pixels, width, height, &self.palette, &self.options);

        Ok(DitheredImage::new(
            indices,
            width,
            height,
            self.palette.clone(),
        ))
    }
}

impl Default for AnnotationDitherer {
    fn default() -> Self {
        Self::new()
    }
}
